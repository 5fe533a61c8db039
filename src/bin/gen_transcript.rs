//! Synthetic transcript generator for stress testing chatsift.
//!
//! Usage: cargo run --features gen-test --bin gen_transcript -- [messages] [output] [seed]
//! Example: cargo run --features gen-test --bin gen_transcript -- 200000 heavy_chat.txt 7
//!
//! The output mixes every category with noise lines the parser must skip:
//! system notices, wrapped continuations, blank lines and CRLF endings.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤔", "🔥", "👍", "❤️", "🌈", "🤖", "🦄", "👨‍👩‍👧‍👦", "🏳️‍🌈", "🇰🇿",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "+1 (555) 010-9999",
    "🔥FireUser🔥",
    "User;With;Semicolons",
];

const DOMAINS: &[&str] = &[
    "example.com",
    "news.ycombinator.com",
    "doc.rust-lang.org/book",
    "ru.wikipedia.org/wiki/Чат",
];

const TITLES: &[&str] = &[
    "Dune by Frank Herbert",
    "The Pragmatic Programmer",
    "Attention Is All You Need",
    "Мастер и Маргарита",
    "Designing Data-Intensive Applications",
];

const KEYWORDS: &[&str] = &["Book", "Books", "book", "article", "articles", "paper", "Papers"];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("synthetic_chat.txt", String::as_str);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(42);

    println!("Synthetic transcript generator");
    println!("   Messages: {count}");
    println!("   Output:   {output}");
    println!("   Seed:     {seed}");
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let header = "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.\n";
    writer.write_all(header.as_bytes())?;
    bytes_written += header.len();

    for i in 0..count {
        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");
        let content = generate_content(&mut rng, i);
        let ending = if i % 97 == 0 { "\r\n" } else { "\n" };

        let line = format!("[{}] {sender}: {content}{ending}", timestamp(i));
        writer.write_all(line.as_bytes())?;
        bytes_written += line.len();

        if i % 50 == 25 {
            let noise = generate_noise_line(&mut rng);
            writer.write_all(noise.as_bytes())?;
            bytes_written += noise.len();
        }

        if (i + 1) % 10_000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\nDone!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );

    Ok(())
}

/// Cycles through the US and EU layouts WhatsApp exports use.
fn timestamp(i: usize) -> String {
    let month = i % 12 + 1;
    let day = i % 28 + 1;
    let minute = i % 60;
    match i % 3 {
        0 => {
            let meridiem = if i % 2 == 0 { "AM" } else { "PM" };
            format!("{month}/{day}/24, {}:{minute:02} {meridiem}", i % 12 + 1)
        }
        1 => format!("{day:02}.{month:02}.24, {:02}:{minute:02}:00", i % 24),
        _ => format!("{day:02}/{month:02}/2024, {:02}:{minute:02}", i % 24),
    }
}

fn generate_content(rng: &mut impl Rng, index: usize) -> String {
    let domain = DOMAINS.choose(rng).copied().unwrap_or("example.com");
    let title = TITLES.choose(rng).copied().unwrap_or("Dune");
    let keyword = KEYWORDS.choose(rng).copied().unwrap_or("Book");
    let emoji = EMOJIS.choose(rng).copied().unwrap_or("🙂");

    match index % 16 {
        // Links, sometimes several or mixed with quotes
        0 => format!("https://{domain}/post/{index}"),
        1 => format!("see http://{domain} and https://{domain}/{index} {emoji}"),
        2 => format!("\"must read\" https://{domain}"),

        // Quotes, including empty and unbalanced ones
        3 => format!("She said \"{title}\" yesterday"),
        4 => "\"one\" and \"two\" and \"three\"".to_string(),
        5 => "he wrote \"\" and left".to_string(),
        6 => format!("unterminated \"quote #{index}"),

        // Reading list
        7 => format!("{keyword}: {title}"),
        8 => format!("my {keyword}:   {title}   "),

        // Keyword without its colon stays a note
        9 => format!("{keyword} club tonight {emoji}"),

        // Notes
        10..=13 => format!("Normal message #{index} with some text {emoji}"),
        14 => format!("Кириллица: Привет мир! #{index}"),
        15 => {
            let padding = "X".repeat(rng.gen_range(1_000..20_000));
            format!("Long note #{index}: {padding}")
        }
        _ => format!("Fallback message #{index}"),
    }
}

fn generate_noise_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..6) {
        0 => "and this is a wrapped continuation line\n".to_string(),
        1 => "\n".to_string(),
        2 => "   \t  \n".to_string(),
        3 => "[1/1/24, 9:00 AM] Alice:\n".to_string(),
        4 => "[] nobody: empty timestamp\n".to_string(),
        _ => "☠️ Random emoji line ☠️\n".to_string(),
    }
}
