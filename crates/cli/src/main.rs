use anyhow::Result;
use hundredone_core::{
    decisions_for, CardDecision, CpuStrategy, Deck, DecisionProvider, Direction, Event, EventBus,
    GameConfig, GameState, PlaySource, Player, PlayerKind, RngState, RoundOutcome, TurnChoice,
    TurnView,
};
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

const FALLBACK_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Copy)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut auto = false;
    let mut seed = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => auto = true,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions { auto, seed }
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(FALLBACK_SEED)
}

fn read_line_basic(prompt: &str) -> Option<String> {
    print!("{prompt} ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

/// Re-prompts until an integer in `min..=max` arrives; exits cleanly when
/// stdin closes.
fn read_int(prompt: &str, min: usize, max: usize) -> usize {
    loop {
        let Some(line) = read_line_basic(prompt) else {
            println!();
            println!("Input closed; leaving the table.");
            std::process::exit(0);
        };
        match line.parse::<usize>() {
            Ok(value) if (min..=max).contains(&value) => return value,
            _ => println!("Invalid input, try again."),
        }
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    }
}

fn choose_decision(mut decisions: Vec<CardDecision>) -> CardDecision {
    if decisions.len() == 1 {
        return decisions.remove(0);
    }
    for (index, decision) in decisions.iter().enumerate() {
        println!("  {}: {}", index + 1, decision.label);
    }
    let choice = read_int(
        &format!("Pick an option (1-{}):", decisions.len()),
        1,
        decisions.len(),
    );
    decisions.remove(choice - 1)
}

fn pick_from_hand(view: &TurnView<'_>) -> TurnChoice {
    let index = read_int(
        &format!("Pick a card to play (1-{}):", view.hand.len()),
        1,
        view.hand.len(),
    ) - 1;
    let decision = choose_decision(decisions_for(view.hand[index], view.total));
    TurnChoice {
        source: PlaySource::Hand(index),
        decision,
    }
}

/// Console seat: prints the hand with every card's options, then asks for
/// the play. All validation and re-prompting happens here; the engine
/// only ever sees the committed result.
struct InteractivePlayer;

impl DecisionProvider for InteractivePlayer {
    fn choose(&mut self, view: TurnView<'_>, deck: &mut Deck, rng: &mut RngState) -> TurnChoice {
        println!("Your hand:");
        for (index, card) in view.hand.iter().enumerate() {
            let labels = decisions_for(*card, view.total)
                .into_iter()
                .map(|decision| decision.label)
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {}: {card} [options: {labels}]", index + 1);
        }
        println!("Choose an action: 1) play a card from your hand");
        if view.can_draw {
            println!("                  2) draw from the deck and play the drawn card");
        }
        let action = if view.can_draw {
            read_int("Choice (1/2):", 1, 2)
        } else {
            read_int("Choice (1):", 1, 1)
        };
        if action == 2 {
            if let Some(drawn) = deck.draw_card(rng) {
                println!("You drew {drawn}.");
                let decision = choose_decision(decisions_for(drawn, view.total));
                return TurnChoice {
                    source: PlaySource::Drawn(drawn),
                    decision,
                };
            }
            println!("Nothing left to draw; play from your hand instead.");
        }
        pick_from_hand(&view)
    }
}

fn player_name(players: &[Player], index: usize) -> &str {
    players
        .get(index)
        .map_or("?", |player| player.name.as_str())
}

fn format_event(players: &[Player], event: &Event) -> Option<String> {
    match event {
        Event::CardPlayed {
            player,
            card,
            label,
            from_draw,
        } => {
            let name = player_name(players, *player);
            if *from_draw {
                Some(format!(
                    "{name} drew from the deck and played {card} ({label})."
                ))
            } else {
                Some(format!("{name} played {card} ({label})."))
            }
        }
        Event::TotalChanged { from, to } => Some(format!("The total goes {from} -> {to}.")),
        Event::DirectionReversed => Some("The turn order is reversed.".to_string()),
        Event::FlowTriggered { flow_count } => Some(format!(
            "The total hit 101 and the pot flows. Flow count: {flow_count}."
        )),
        Event::FlowCardRevealed { card, new_total } => Some(format!(
            "Flow card {card} is revealed; the total restarts at {new_total}."
        )),
        Event::FlowDeckEmpty => {
            Some("No flow card could be drawn; the total restarts at 0.".to_string())
        }
        Event::RoundEnded { outcome } => Some(match outcome {
            RoundOutcome::Bust { loser } => format!(
                "The total went over 101; {} loses the round.",
                player_name(players, *loser)
            ),
            RoundOutcome::SpecialWin { winner, .. } => format!(
                "{} wins the round outright with the joker!",
                player_name(players, *winner)
            ),
        }),
        Event::ScoreApplied {
            player,
            delta,
            score,
        } => Some(format!(
            "{}: {delta:+} points (now {score}).",
            player_name(players, *player)
        )),
        Event::GameEnded { loser } => Some(format!(
            "{} hit the losing threshold.",
            player_name(players, *loser)
        )),
        // The round driver prints its own banners for these.
        Event::RoundStarted { .. } | Event::TurnStarted { .. } | Event::HandReplenished { .. } => {
            None
        }
    }
}

fn drain_events(players: &[Player], events: &mut EventBus) {
    for event in events.drain() {
        if let Some(line) = format_event(players, &event) {
            println!("{line}");
        }
    }
}

fn print_scores(players: &[Player]) {
    for player in players {
        println!("  {}: {}", player.name, player.score);
    }
}

fn play_round(
    game: &mut GameState,
    human: &mut dyn DecisionProvider,
    cpu: &mut dyn DecisionProvider,
    events: &mut EventBus,
) -> Result<()> {
    let mut round = game.begin_round(events)?;
    println!();
    println!("--- New round ---");
    println!("Starting player: {}", game.players[round.current].name);
    drain_events(&game.players, events);
    loop {
        let seat = round.current;
        println!();
        println!("Current total: {}", round.total);
        println!("Order: {}", direction_name(round.direction));
        println!(
            "{}'s turn. Score: {}",
            game.players[seat].name, game.players[seat].score
        );
        let provider: &mut dyn DecisionProvider = match game.players[seat].kind {
            PlayerKind::Human => &mut *human,
            PlayerKind::Cpu => &mut *cpu,
        };
        let finished = round.play_turn(&mut game.players, provider, &mut game.rng, events)?;
        drain_events(&game.players, events);
        if finished.is_some() {
            break;
        }
    }
    game.settle_round(&round, events)?;
    drain_events(&game.players, events);
    println!();
    println!("Scores after the round:");
    print_scores(&game.players);
    Ok(())
}

fn report_final(game: &GameState) {
    println!();
    println!("Game over! Final standings:");
    print_scores(&game.players);
    if let Some(loser) = game.loser() {
        println!("{} takes the overall loss.", loser.name);
    }
}

fn run_game(seed: u64) -> Result<()> {
    println!("Welcome to the card game 101!");
    let config = GameConfig::default();
    let max_cpus = config.max_cpu_players;
    let cpu_count = read_int(
        &format!("How many CPU players join? (0-{max_cpus}):"),
        0,
        max_cpus,
    );
    if cpu_count == 0 {
        println!("One CPU joins anyway so the table has two players.");
    }
    let mut game = GameState::new(config, "You", cpu_count, seed);
    let mut events = EventBus::default();
    let mut human = InteractivePlayer;
    let mut cpu = CpuStrategy;
    while !game.is_over() {
        play_round(&mut game, &mut human, &mut cpu, &mut events)?;
    }
    report_final(&game);
    Ok(())
}

fn run_auto(seed: u64) -> Result<()> {
    println!("Auto mode: CPU-only table, seed {seed}.");
    let mut game = GameState::new(GameConfig::default(), "CPU0", 3, seed);
    let mut events = EventBus::default();
    let mut driver = CpuStrategy;
    let mut cpu = CpuStrategy;
    while !game.is_over() {
        play_round(&mut game, &mut driver, &mut cpu, &mut events)?;
    }
    report_final(&game);
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    let seed = options.seed.unwrap_or_else(seed_from_time);
    if options.auto {
        run_auto(seed)
    } else {
        run_game(seed)
    }
}
