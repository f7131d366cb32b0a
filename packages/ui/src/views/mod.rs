mod home;
pub use home::HomeView;

mod resume_form;
pub use resume_form::ResumeFormView;

mod resume_list;
pub use resume_list::ResumeListView;

mod profile;
pub use profile::ProfileView;

mod checkout;
pub use checkout::CheckoutView;
