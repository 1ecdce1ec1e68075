use crate::service::console::{PAY_LOAN_PAYLOAD, PAYLOAD_MENU};
use rand::Rng;
use std::fs::File;

/// Generate a mock script with random actions. Used to exercise the script runner.
///
/// The script opens the account first and then mixes deposits, withdrawals,
/// loan requests, repayments and the occasional close request, with amounts
/// taken from the console menu.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["type", "payload"])?;

    let mut rng = rand::rng();
    let mut rows = 0usize;

    if count > 0 {
        wtr.write_record(["openAccount", ""])?;
        rows += 1;
    }

    while rows < count {
        let amount = PAYLOAD_MENU[rng.random_range(0..PAYLOAD_MENU.len())].to_string();

        match rng.random_range(0..100) {
            0..=34 => wtr.write_record(["deposit", &amount])?,
            35..=64 => wtr.write_record(["withdraw", &amount])?,
            65..=79 => wtr.write_record(["loan", &amount])?,
            80..=96 => wtr.write_record(["payLoan", &PAY_LOAN_PAYLOAD.to_string()])?,
            _ => wtr.write_record(["closeAccount", ""])?,
        }
        rows += 1;
    }

    wtr.flush()?;
    println!("✓ Generated {} actions to {}", rows, output);
    Ok(())
}
