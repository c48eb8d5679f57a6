mod helpers;

mod email_flows;
mod login;
mod logout;
mod register;
