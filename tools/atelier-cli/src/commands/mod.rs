//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod open;
pub mod review;

use anyhow::anyhow;
use atelier_commerce::catalog::CategoryFilter;
use atelier_commerce::checkout::{PaymentMethod, Wallet};
use atelier_commerce::FieldErrors;
use clap::{Args, Subcommand};

use crate::context::Context;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List products.
    List {
        /// Only show one category (Tops, Bottoms, Outerwear, Accessories, Footwear).
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
    },
    /// Show one product with related items.
    Show {
        /// Product ID.
        id: String,
    },
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (default).
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// How many to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Remove a product entirely.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set the quantity of a product; 0 or less removes it.
    Set {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Contact email.
    #[arg(long, default_value = "")]
    pub email: String,

    /// First name.
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name.
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Street address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// City.
    #[arg(long, default_value = "")]
    pub city: String,

    /// ZIP code.
    #[arg(long, default_value = "")]
    pub zip: String,

    /// Payment method: card, upi or wallet.
    #[arg(short, long, default_value = "card")]
    pub method: PaymentMethod,

    /// Card number.
    #[arg(long, default_value = "")]
    pub card_number: String,

    /// Card expiry (MM/YY).
    #[arg(long, default_value = "")]
    pub expiry: String,

    /// Card security code.
    #[arg(long, default_value = "")]
    pub cvv: String,

    /// UPI ID.
    #[arg(long, default_value = "")]
    pub upi_id: String,

    /// Wallet: paypal, applepay or googlepay.
    #[arg(long)]
    pub wallet: Option<Wallet>,
}

/// Arguments for the review command.
#[derive(Args)]
pub struct ReviewArgs {
    #[command(subcommand)]
    pub command: Option<ReviewCommand>,
}

#[derive(Subcommand)]
pub enum ReviewCommand {
    /// List reviews with the rating summary (default).
    List,
    /// Submit a review.
    Add {
        /// Your name.
        #[arg(short, long, default_value = "")]
        name: String,
        /// Stars, 1 to 5.
        #[arg(short, long)]
        rating: Option<u8>,
        /// What you thought.
        #[arg(long, default_value = "")]
        comment: String,
    },
}

/// Arguments for the auth command.
#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Create an account and sign in.
    Signup {
        /// Full name.
        #[arg(short, long, default_value = "")]
        name: String,
        /// Email address.
        #[arg(short, long, default_value = "")]
        email: String,
        /// Password (prompted when omitted).
        #[arg(short, long)]
        password: Option<String>,
        /// Password again (prompted when omitted).
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in.
    Login {
        /// Email address.
        #[arg(short, long, default_value = "")]
        email: String,
        /// Password (prompted when omitted).
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out.
    Logout,
    /// Show who is signed in.
    Whoami,
}

/// Arguments for the open command.
#[derive(Args)]
pub struct OpenArgs {
    /// Storefront path, e.g. `/product/3`.
    #[arg(default_value = "/")]
    pub path: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Print validation messages and turn them into a command failure.
pub fn reject_form(ctx: &Context, errors: &FieldErrors) -> anyhow::Error {
    ctx.output.field_errors(errors);
    let noun = if errors.len() == 1 { "field" } else { "fields" };
    anyhow!("Please fix {} {}", errors.len(), noun)
}
