// bin/log_2fa.rs
// Cron logging: print the current 2FA code with a UTC timestamp, meant to be
// scheduled (e.g. */1 * * * *) once the seed is provisioned.

use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;

use semilla::state;
use semilla::store::SeedStore;
use semilla::totp;

fn main() -> Result<()> {
    dotenv().ok();

    let st = state::init_state()?;
    let Some(seed) = st.store.load()? else {
        println!("No seed available");
        return Ok(());
    };

    let totp = totp::build_totp(&st.issuer, &st.account, &seed)?;
    let code = totp::generate_code(&totp, totp::unix_now()?);

    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    println!("{timestamp} - 2FA Code: {code}");
    Ok(())
}
