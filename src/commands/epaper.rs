// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::client::Client;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(client: &Client, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub)?,
        Some(("show", sub)) => show(client, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let papers = client.fetch_epapers()?;
    if !maybe_print_json(json_flag, jsonl_flag, &papers)? {
        let rows: Vec<Vec<String>> = papers
            .iter()
            .map(|p| {
                vec![
                    p.title.clone(),
                    p.created_at.clone(),
                    p.image_url.clone(),
                    p.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Title", "Created", "Image", "Id"], rows)
        );
    }
    Ok(())
}

fn show(client: &Client, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let id = sub.get_one::<String>("id").unwrap();

    let Some((paper, hotspots)) = client.fetch_epaper(id)? else {
        return Err(anyhow::anyhow!("No e-paper with id '{}'", id));
    };
    if maybe_print_json(json_flag, jsonl_flag, &(&paper, &hotspots))? {
        return Ok(());
    }

    println!("{} ({})", paper.title, paper.created_at);
    if !paper.image_url.is_empty() {
        println!("Image: {}", paper.image_url);
    }
    let rows: Vec<Vec<String>> = hotspots
        .iter()
        .map(|h| {
            vec![
                h.title.clone(),
                h.content.clone(),
                format!("{:.3}", h.x),
                format!("{:.3}", h.y),
                format!("{:.3}", h.width),
                format!("{:.3}", h.height),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Hotspot", "Content", "X", "Y", "W", "H"], rows)
    );
    Ok(())
}
