//! voice-clone-tts CLI entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use voice_clone_tts::app::{Notice, Reply, Studio};
use voice_clone_tts::backend::{HttpModel, ModelCache};
use voice_clone_tts::cli::Args;
use voice_clone_tts::config::ensure_layout;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .format_timestamp(None)
        .init();

    let layout = ensure_layout(&args.base_dir)
        .with_context(|| format!("Failed to prepare {}", args.base_dir.display()))?;

    let models = Arc::new(ModelCache::http(args.model_config()));
    let studio = Studio::new(&layout, models).with_collision_policy(args.on_conflict);

    if !args.has_action() {
        eprintln!("No action specified. Use -c to capture a sample or -g to generate speech.");
        eprintln!("Run with --help for usage information.");
        return Ok(());
    }

    let mut failed = false;

    if args.list_samples {
        failed |= list_samples(&studio);
    }

    if let Some(id) = &args.discard_sample {
        failed |= report(&studio.discard_sample(id));
    }

    if args.capture.is_some() || args.sample.is_some() {
        failed |= capture_and_save(&studio, &args);
    }

    if args.list_voices {
        failed |= list_voices(&studio);
    }

    if args.list_languages {
        failed |= list_languages(&studio);
    }

    if let Some(text) = &args.generate {
        println!("Generating audio... first run may take longer while the model loads.");
        failed |= report(&studio.generate(text, &args.voice, &args.language));
    }

    if args.demo {
        let reply = studio.demo();
        failed |= report(&reply);
        if let Some(outcome) = reply.value {
            println!("{}", outcome.path.display());
        }
    }

    if args.list_outputs {
        failed |= list_outputs(&studio);
    }

    if let Some(name) = &args.delete_output {
        failed |= report(&studio.delete_output(name));
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}

/// Print the reply's notices; returns true when any of them is an error.
fn report<T>(reply: &Reply<T>) -> bool {
    for notice in &reply.notices {
        match notice {
            Notice::Error(_) | Notice::Warning(_) => eprintln!("{notice}"),
            _ => println!("{notice}"),
        }
    }
    reply.has_errors()
}

fn capture_and_save(studio: &Studio<HttpModel>, args: &Args) -> bool {
    let sample_path = match (&args.capture, &args.sample) {
        (Some(path), _) => {
            let reply = studio.capture_file(path);
            if report(&reply) {
                return true;
            }
            match reply.value {
                Some(handle) => {
                    if let Some(secs) = handle.duration_secs {
                        println!("  Duration: {secs:.2}s");
                    }
                    println!("  Sample id: {}", handle.id);
                    handle.path
                }
                None => return true,
            }
        }
        (None, Some(id)) => {
            let reply = studio.sample_path(id);
            if report(&reply) {
                return true;
            }
            match reply.value {
                Some(path) => path,
                None => return true,
            }
        }
        (None, None) => return false,
    };

    match &args.name {
        Some(name) => report(&studio.save_profile(&sample_path, name)),
        None => {
            println!("Sample kept. Save it with --sample <id> --name <profile>.");
            false
        }
    }
}

fn list_samples(studio: &Studio<HttpModel>) -> bool {
    let reply = studio.samples();
    if let Some(samples) = &reply.value {
        if samples.is_empty() {
            println!("No pending samples.");
        }
        for sample in samples {
            match sample.duration_secs {
                Some(secs) => println!("  {} ({secs:.2}s)", sample.id),
                None => println!("  {}", sample.id),
            }
        }
    }
    report(&reply)
}

fn list_voices(studio: &Studio<HttpModel>) -> bool {
    let reply = studio.voices();
    if let Some(voices) = &reply.value {
        println!("Voice profiles:");
        for voice in voices {
            println!("  {voice}");
        }
    }
    report(&reply)
}

fn list_languages(studio: &Studio<HttpModel>) -> bool {
    let reply = studio.languages();
    if let Some(languages) = &reply.value {
        if languages.is_empty() {
            println!("The model does not advertise languages.");
        } else {
            println!("Languages: {}", languages.join(", "));
        }
    }
    report(&reply)
}

fn list_outputs(studio: &Studio<HttpModel>) -> bool {
    let reply = studio.outputs();
    if let Some(outputs) = &reply.value {
        for output in outputs {
            println!(
                "  {}  {}  {} bytes",
                output.file_name,
                output.modified.format("%Y-%m-%d %H:%M:%S"),
                output.size_bytes
            );
            println!("    {}", output.path.display());
        }
    }
    report(&reply)
}
