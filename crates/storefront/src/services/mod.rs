//! Screen-level workflows built on the stores.
//!
//! # Services
//!
//! - `account` - Login/register form submission and logout
//! - `cart` - Add-to-cart with confirmation notice
//! - `checkout` - Simulated payment, order creation, order history
//! - `forms` - Local validation of the account forms

pub mod account;
pub mod cart;
pub mod checkout;
pub mod forms;

pub use account::AccountService;
pub use cart::CartService;
pub use checkout::{CheckoutError, CheckoutService, Receipt};
pub use forms::{LoginForm, RegisterForm, ValidationError};
