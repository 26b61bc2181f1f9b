use anyhow::Result;

use client::Client;

use crate::constants;
use crate::fragment_view;

/// One-shot mode: post a single dream and print the interpretation to
/// stdout. `--html` emits the nested markup of the original web client
/// instead of plain lines.
pub async fn run(dream: &str, html: bool, endpoint: String) -> Result<()> {
    let cli = Client::new(endpoint)?;
    match cli.interpret(dream).await {
        Ok(interp) => {
            let fragment = renderer::render(&interp.content);
            if html {
                println!("{}", fragment.to_html());
            } else {
                println!("{}", interp.heading());
                println!("[{}]", interp.image_path());
                println!();
                for line in fragment_view::fragment_lines(&fragment) {
                    let text: String =
                        line.spans.iter().map(|s| s.content.as_ref()).collect();
                    println!("{}", text);
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", constants::ERROR_MESSAGE);
            Err(e.into())
        }
    }
}
