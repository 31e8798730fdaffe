//! Account commands.

use anyhow::{Context as _, Result};
use atelier_auth::{AuthError, AuthService, LoginForm, SignupForm, User};
use dialoguer::Password;
use serde_json::json;

use super::{reject_form, AuthArgs, AuthCommand};
use crate::context::Context;

/// Run the auth command.
pub async fn run(args: AuthArgs, ctx: &Context) -> Result<()> {
    let cache = ctx.cache()?;
    let auth = AuthService::new(&cache);

    match args.command {
        AuthCommand::Signup {
            name,
            email,
            password,
            confirm_password,
        } => {
            let password = password_or_prompt(password, "Password")?;
            let confirm_password = password_or_prompt(confirm_password, "Confirm password")?;
            let form = SignupForm {
                name,
                email,
                password,
                confirm_password,
            };
            let user = finish(ctx, auth.signup(&form))?;
            ctx.output.success("Account created successfully!");
            show_user(ctx, &user);
        }
        AuthCommand::Login { email, password } => {
            let password = password_or_prompt(password, "Password")?;
            let user = finish(ctx, auth.login(&LoginForm::new(email, password)))?;
            ctx.output.success("Welcome back!");
            show_user(ctx, &user);
        }
        AuthCommand::Logout => {
            auth.logout()?;
            ctx.output.success("Signed out");
            if ctx.output.is_json() {
                show_user(ctx, &User::Anonymous);
            }
        }
        AuthCommand::Whoami => show_user(ctx, &auth.current_user()?),
    }

    Ok(())
}

fn password_or_prompt(given: Option<String>, prompt: &str) -> Result<String> {
    match given {
        Some(password) => Ok(password),
        None => Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .context("Failed to read password"),
    }
}

fn finish(ctx: &Context, result: Result<User, AuthError>) -> Result<User> {
    match result {
        Ok(user) => Ok(user),
        Err(AuthError::Validation(errors)) => Err(reject_form(ctx, &errors)),
        Err(e) => Err(e.into()),
    }
}

/// The account page.
pub fn show_user(ctx: &Context, user: &User) {
    if ctx.output.is_json() {
        ctx.output.json(&json!({ "user": user }));
        return;
    }

    match user {
        User::Authenticated { email, name, .. } => {
            ctx.output.kv("Signed in as", name);
            ctx.output.kv("Email", email);
        }
        User::Anonymous => {
            ctx.output.info("Not signed in. Use `atelier auth login` or `atelier auth signup`.");
        }
    }
}
