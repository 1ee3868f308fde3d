//! # Records mirrored from the clinic backend
//!
//! Every type here is a plain `Serialize + Deserialize` record shaped like a
//! backend row or request body. The client does not own their lifecycle: it
//! asks the API to create, read, update or delete them and re-renders the
//! response.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`User`], [`AuthSession`] and the auth / profile request bodies |
//! | [`customer`] | [`Customer`], [`NewCustomer`] |
//! | [`appointment`] | [`Appointment`], [`AppointmentStatus`], [`NewAppointment`], [`AppointmentUpdate`] |
//! | [`clinical`] | [`MedicalRecord`], [`Prescription`], [`Medication`], [`LabTest`], [`LabTestType`] and their inputs |
//! | [`clinic`] | [`Clinic`], [`Doctor`], [`Schedule`], [`ScheduleInput`] |
//! | [`finance`] | [`PayrollEntry`], [`Payment`], [`PaymentKind`] |
//!
//! Update bodies skip `None` fields so a partial `PUT` only touches what the
//! form changed.

pub mod appointment;
pub mod clinic;
pub mod clinical;
pub mod customer;
pub mod finance;
pub mod user;

pub use appointment::{
    Appointment, AppointmentStatus, AppointmentUpdate, NewAppointment, DEFAULT_DURATION_MINUTES,
};
pub use clinic::{weekday_name, Clinic, Doctor, Schedule, ScheduleInput};
pub use clinical::{
    LabTest, LabTestInput, LabTestStatus, LabTestType, MedicalRecord, MedicalRecordInput,
    Medication, Prescription, PrescriptionInput,
};
pub use customer::{Customer, NewCustomer};
pub use finance::{Payment, PaymentKind, PayrollEntry};
pub use user::{
    AuthSession, ForgotPasswordRequest, LoginRequest, MessageResponse, PasswordChange,
    ProfileUpdate, RegisterRequest, ResetPasswordRequest, User,
};
