mod contact;
mod health_check;
mod home;

pub use contact::submit_contact_form;
pub use health_check::health_check;
pub use home::home;
