use luckysector::match_data::MatchData;

fn main() {
    let data = r#"
    {"home_team":"Arsenal","away_team":"Chelsea","league":"Premier League","match_date":"2025-10-04T15:00:00+00:00","home_odds":2.5,"draw_odds":3.2,"away_odds":2.8}
    "#;

    let match_data = MatchData::from_json(data).unwrap();

    println!(
        "{} vs {} ({})",
        match_data.home_team, match_data.away_team, match_data.league
    );

    if let Some(kickoff) = match_data.match_date_utc() {
        println!("Kickoff: {kickoff}");
    }

    let prediction = match_data.prediction();
    println!(
        "Prediction: {} ({}% confidence)",
        prediction.result, prediction.confidence
    );

    let pair = match_data.sector_pair();
    println!("Lucky Sector: {}", match_data.lucky_sector());
    println!("Sector 1: {}", pair.sector1);
    println!("Sector 2: {}", pair.sector2);

    let lucky = match_data.lucky_numbers();
    println!("Lucky numbers: {lucky}");
    println!("{}", lucky.table());
}
