mod home;
pub use home::Home;

mod register;
pub use register::Register;

mod login;
pub use login::Login;

mod resumes;
pub use resumes::{CreateResume, Resumes};

mod profile;
pub use profile::Profile;

mod checkout;
pub use checkout::Checkout;
