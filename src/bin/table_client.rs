use serde::Deserialize;

// --- Re-definitions of DTOs ---
// The client only reads what it renders, so it keeps its own lean copies.

#[derive(Debug, Deserialize)]
struct RollDto {
    dice: [u8; 2],
    total: u8,
    state: String,
}

#[derive(Debug, Deserialize)]
struct GameReport {
    state: String,
    point: Option<u8>,
    wins: u32,
    losses: u32,
    rolls: Vec<RollDto>,
}

const FACES: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];

fn face(value: u8) -> char {
    usize::from(value)
        .checked_sub(1)
        .and_then(|i| FACES.get(i))
        .copied()
        .unwrap_or('?')
}

fn render_roll(index: usize, roll: &RollDto) -> String {
    format!(
        "{:>3}. {} {}  total {:>2}  {}",
        index + 1,
        face(roll.dice[0]),
        face(roll.dice[1]),
        roll.total,
        roll.state
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::var("TABLE_URL").unwrap_or_else(|_| "http://127.0.0.1:3000".into());
    let client = reqwest::Client::new();

    println!("--- 🎲 CRAPS TABLE CLIENT ---");
    println!("Table: {}", base_url);

    println!("\n[1] Playing one game...");
    let report = client
        .post(format!("{}/game/play", base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<GameReport>()
        .await?;

    for (i, roll) in report.rolls.iter().enumerate() {
        println!("{}", render_roll(i, roll));
    }

    println!("\n[2] Result: {}", report.state);
    if let Some(point) = report.point {
        println!("Point was {}", point);
    }
    println!("Wins: {}  Losses: {}", report.wins, report.losses);

    Ok(())
}
