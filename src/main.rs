// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use expensebook::{cli, client, commands, config};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let settings = config::load()?;
    let client = client::Client::new(&settings)?;

    match matches.subcommand() {
        Some(("dashboard", sub)) => commands::dashboard::handle(&client, &settings, sub)?,
        Some(("expenses", sub)) => commands::expenses::handle(&client, sub)?,
        Some(("incomes", sub)) => commands::incomes::handle(&client, sub)?,
        Some(("users", sub)) => commands::users::handle(&client, sub)?,
        Some(("epaper", sub)) => commands::epaper::handle(&client, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&client, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&client, &settings)?,
        Some(("config", sub)) => commands::settings::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
