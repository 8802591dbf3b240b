//! Implementation of the `dictum number` command.

use dictum::{FormatOptions, NumberFormatter};

/// Arguments for the number command.
#[derive(Debug, clap::Args)]
pub struct NumberArgs {
    /// Number to format
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Digit group separator
    #[arg(long, default_value = ",")]
    pub group: String,

    /// Decimal separator
    #[arg(long, default_value = ".")]
    pub decimal: String,

    /// Digits after the decimal separator; negative rounds to tens, hundreds...
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub places: i32,

    /// Print `+` in front of positive numbers
    #[arg(long)]
    pub force_plus: bool,
}

/// Run the number command.
pub fn run_number(args: NumberArgs) -> miette::Result<i32> {
    let formatter = NumberFormatter::new(Some(&args.group), Some(&args.decimal));
    let options = FormatOptions::builder()
        .places(args.places)
        .force_plus(args.force_plus)
        .build();
    println!("{}", formatter.format(args.value, options));
    Ok(exitcode::OK)
}
