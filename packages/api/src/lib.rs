//! # API crate — REST client for the clinic backend
//!
//! Every dashboard talks to the backend through [`ApiClient`]. The backend is
//! an external collaborator; the routes below are what this client assumes.
//!
//! | Module | Routes |
//! |--------|--------|
//! | [`auth`] | `POST /auth/login`, `/auth/register`, `/auth/forgot-password`, `/auth/reset-password` |
//! | [`users`] | `GET/PUT /users/me`, `PUT /users/me/password` |
//! | [`appointments`] | `/appointments` CRUD, cancel via status update |
//! | [`records`] | `/medical-records` CRUD |
//! | [`prescriptions`] | `/prescriptions` CRUD, `GET /medications` |
//! | [`lab_tests`] | `/lab-tests` CRUD, `GET /lab-test-types` |
//! | [`clinics`] | `GET /clinics`, `GET /doctors`, `/schedules` CRUD |
//! | [`customers`] | `POST/GET /customers` |
//!
//! Endpoint modules only add `impl ApiClient` blocks; transport, auth header
//! and error handling live in [`client`] and [`error`].

pub mod appointments;
pub mod auth;
pub mod client;
pub mod clinics;
pub mod customers;
pub mod error;
pub mod lab_tests;
pub mod prescriptions;
pub mod records;
pub mod users;

pub use appointments::AppointmentQuery;
pub use client::ApiClient;
pub use error::ApiError;
