use clock_codec::{clock_to_day_fraction, clock_to_seconds, seconds_to_clock};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let seconds = [36000.0, 4500.0];
    println!("Formatting {:?}:", seconds);
    match seconds_to_clock(&seconds) {
        Ok(clocks) => {
            for clock in &clocks {
                println!("- {}", clock);
            }
        }
        Err(e) => eprintln!("Formatting error: {}", e),
    }

    // Any extra arguments are parsed as clock strings
    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = vec!["10:00:00".to_string(), "01:15:30.5".to_string()];
    }

    println!("\nParsing {:?}:", inputs);
    match clock_to_seconds(&inputs).and_then(|secs| {
        clock_to_day_fraction(&inputs).map(|fractions| (secs, fractions))
    }) {
        Ok((secs, fractions)) => {
            for ((input, s), f) in inputs.iter().zip(&secs).zip(&fractions) {
                println!("- {}: {} s, {:.6} of a day", input, s, f);
            }
        }
        Err(e) => eprintln!("Parsing error: {}", e),
    }
}
