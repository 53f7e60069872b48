// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Runs the three chains in sequence and prints an inspection report for
//! each. Every failure here is an intentional demonstration value; producing
//! and displaying them is the program's successful outcome.

use snag_compare::{annotated, bare, report, wrapped};

fn main() {
    let err = bare::call_a().expect_err("chain-bare always fails");
    println!("{}", report::render("Chain-Bare", &err));

    let err = annotated::call_a().expect_err("chain-annotated always fails");
    println!("{}", report::render("Chain-Annotated", &err));

    let err = wrapped::call_a().expect_err("chain-wrapped always fails");
    println!("{}", report::render("Chain-Wrapped", &err));
}
