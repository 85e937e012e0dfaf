use super::*;

use campus_circle::error::MarketError;
use campus_circle::market::NewIdentity;

use crate::cli_commands::SignupArgs;

pub(super) fn handle_signup_command(market: &Market, args: SignupArgs) -> Result<()> {
    check_signup_form(&args)?;
    let identity = market.signup(NewIdentity {
        name: args.name,
        email: args.email,
        password: args.password,
        major: args.major,
        age: args.age,
        gender: args.gender,
    })?;
    println!("Signed up as {} <{}>", identity.name, identity.email);
    Ok(())
}

pub(super) fn handle_login_command(market: &Market, email: &str, password: &str) -> Result<()> {
    let identity = market.login(email, password)?;
    println!("Signed in as {} <{}>", identity.name, identity.email);
    Ok(())
}

pub(super) fn handle_logout_command(market: &Market) -> Result<()> {
    market.logout()?;
    println!("Signed out");
    Ok(())
}

pub(super) fn handle_whoami_command(market: &Market, json: bool) -> Result<()> {
    let Some(identity) = market.current_identity()? else {
        println!("Not signed in");
        return Ok(());
    };
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&identity).context("serialize identity json")?
        );
    } else {
        println!("name: {}", identity.name);
        println!("email: {}", identity.email);
        if let Some(major) = identity.major {
            println!("major: {}", major);
        }
        if let Some(age) = identity.age {
            println!("age: {}", age);
        }
        if let Some(gender) = identity.gender {
            println!("gender: {}", gender);
        }
    }
    Ok(())
}

/// Same rules the original signup form enforced. The core only checks that
/// the required fields are present.
fn check_signup_form(args: &SignupArgs) -> Result<()> {
    if args.name.trim().len() < 2 {
        return Err(MarketError::invalid_input("name must be at least 2 characters").into());
    }
    if !args.email.contains('@') {
        return Err(MarketError::invalid_input("email must contain '@'").into());
    }
    if args.password.len() < 6 {
        return Err(MarketError::invalid_input("password must be at least 6 characters").into());
    }
    if args.major.trim().is_empty() {
        return Err(MarketError::invalid_input("major is required").into());
    }
    if let Some(age) = args.age
        && !(18..=100).contains(&age)
    {
        return Err(MarketError::invalid_input("age must be between 18 and 100").into());
    }
    Ok(())
}
