// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Thalassa CLI entrypoint.
//!
//! Runs the interactive diagram editor against a JSON diagram file
//! (`diagram.json` in the current working directory by default).

use std::error::Error;

const DEFAULT_DIAGRAM_FILE: &str = "diagram.json";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<diagram-file>]\n  {program} [--file <diagram-file>]\n\nIf diagram-file/--file is omitted, `{DEFAULT_DIAGRAM_FILE}` in the current working directory is used.\nThe file is created on the first save."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    diagram_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => {
                if options.diagram_file.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.diagram_file = Some(file);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.diagram_file.is_some() {
                    return Err(());
                }
                options.diagram_file = Some(arg);
            }
        }
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "thalassa".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let path = options.diagram_file.unwrap_or_else(|| DEFAULT_DIAGRAM_FILE.to_owned());
        thalassa::tui::run(thalassa::store::GraphFile::new(path))?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("thalassa: {err}");
        std::process::exit(1);
    }
}
