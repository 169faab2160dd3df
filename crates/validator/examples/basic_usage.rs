//! Basic usage example for formic-validator

use formic_validator::prelude::*;

fn main() {
    let mut form = FormValidator::new();

    form.register(Box::new(
        MemoryField::new("username")
            .with_attribute("required", "")
            .with_attribute("minlength", "3")
            .with_attribute("maxlength", "12")
            .with_value("al"),
    ));

    let email = MemoryField::new("email")
        .with_attribute("required", "")
        .with_attribute("type", "email");
    let email_input = email.value_handle();
    form.register(Box::new(email));

    form.register(Box::new(
        MemoryField::new("age")
            .with_attribute("range", "18,99")
            .with_value("42"),
    ));

    // Pre-submit check: every field evaluated, first error per field.
    let report = form.validate_all();
    println!("form passed: {}", report.passed);
    for (id, message) in report.failures() {
        println!("  {id}: {message}");
    }

    // The user keeps typing; live validation tracks the current value.
    email_input.set("someone@example.com");
    match form.validate_one("email") {
        Some(Ok(())) => println!("email is now valid"),
        Some(Err(error)) => println!("email still invalid: {}", error.message),
        None => println!("no field called 'email'"),
    }
}
