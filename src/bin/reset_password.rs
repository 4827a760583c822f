//! A command line tool for resetting a user's password directly against the
//! application database. Intended for the server operator, since the API has
//! no self-service password reset.

use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use hisab::{
    password::{PasswordHash, ValidatedPassword},
    user::{get_user_by_email, update_user_password},
};

/// Reset the password of the user registered with the given email address.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The email address of the user whose password should be reset.
    #[arg(long)]
    email: String,
}

fn main() {
    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not open the database file.");

    let user = match get_user_by_email(&args.email, &connection) {
        Ok(user) => user,
        Err(error) => {
            eprintln!("Could not find a user with the email {}: {error}", args.email);
            exit(1);
        }
    };

    let password = rpassword::prompt_password("New password: ").expect("Could not read password");
    let confirm_password =
        rpassword::prompt_password("Confirm new password: ").expect("Could not read password");

    if password != confirm_password {
        eprintln!("The passwords do not match.");
        exit(1);
    }

    let validated_password = match ValidatedPassword::new(&password) {
        Ok(password) => password,
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        }
    };

    let password_hash = PasswordHash::new(validated_password, PasswordHash::DEFAULT_COST)
        .expect("Could not hash the password");

    update_user_password(user.id, password_hash, &connection)
        .expect("Could not update the password");

    println!("Updated the password for {}.", args.email);
}
