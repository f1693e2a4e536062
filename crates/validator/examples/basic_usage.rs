//! Basic usage example for loginkit-validator

use loginkit_validator::prelude::*;

fn main() {
    let validation = ValidationComposite::build([
        ValidationBuilder::field("email").required().email().build(),
        ValidationBuilder::field("password").required().min(5).build(),
    ]);

    let attempts = [
        FieldValues::from([("email", ""), ("password", "")]),
        FieldValues::from([("email", "someone@"), ("password", "abc")]),
        FieldValues::from([("email", "someone@example.com"), ("password", "hunter22")]),
    ];

    for values in &attempts {
        for field in ["email", "password"] {
            match validation.validate(field, values) {
                None => println!("{field:>8}: ok"),
                Some(message) => println!("{field:>8}: {message}"),
            }
        }
        println!();
    }
}
