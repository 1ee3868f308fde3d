mod auth;
pub use auth::{ForgotPassword, Login, Register, ResetPassword};

mod dashboards;
pub use dashboards::{
    Accounting, AppShell, Doctor, Executive, Management, Patient, Profile, Reception,
};
