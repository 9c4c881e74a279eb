//! The text menu. All prompts read from a `BufRead` and write to a `Write`,
//! so the whole loop can be driven from a test with canned input.

use crate::catch::CaptureDevice;
use crate::config::GameConfig;
use crate::errors::GameResult;
use crate::persistence::{load_game, save_game};
use crate::rng::RandomSource;
use crate::trainer::{ItemUseOutcome, Trainer};
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Battle,
    Catch,
    UseItem,
    Save,
    Load,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Battle),
            "2" => Some(MenuChoice::Catch),
            "3" => Some(MenuChoice::UseItem),
            "4" => Some(MenuChoice::Save),
            "5" => Some(MenuChoice::Load),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\
1. Battle
2. Catch
3. Use item
4. Save
5. Load
6. Exit";

/// Read one line. `None` means the input is closed.
fn read_line<R: BufRead>(input: &mut R) -> GameResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Parse a 1-based menu number into a 0-based index below `len`.
fn parse_index(answer: &str, len: usize) -> Option<usize> {
    match answer.parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Some(n - 1),
        _ => None,
    }
}

/// Ask the player to pick a starter until they give a valid answer.
/// Returns `None` if the input closes first.
pub fn choose_starter<R: BufRead, W: Write>(
    config: &GameConfig,
    player_name: &str,
    input: &mut R,
    output: &mut W,
) -> GameResult<Option<Trainer>> {
    loop {
        writeln!(output, "Choose your starter:")?;
        for (i, name) in config.starters.iter().enumerate() {
            let creature = config.create_creature(name)?;
            writeln!(output, "{}. {}", i + 1, creature)?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };
        match parse_index(&answer, config.starters.len()) {
            Some(index) => {
                let trainer = config.create_player(player_name, &config.starters[index])?;
                writeln!(output, "You chose {}!", trainer.team[0].name)?;
                return Ok(Some(trainer));
            }
            None => writeln!(output, "Invalid choice, try again.")?,
        }
    }
}

pub struct Session {
    config: GameConfig,
    pub player: Trainer,
    pub rival: Trainer,
    save_path: PathBuf,
    rng: Box<dyn RandomSource>,
}

impl Session {
    pub fn new(
        config: GameConfig,
        player: Trainer,
        save_path: PathBuf,
        rng: Box<dyn RandomSource>,
    ) -> GameResult<Self> {
        let rival = config.create_rival()?;
        Ok(Session {
            config,
            player,
            rival,
            save_path,
            rng,
        })
    }

    /// Run the menu until the player exits or the input closes.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> GameResult<()> {
        loop {
            self.show_summary(output)?;
            writeln!(output, "{}", MENU)?;
            write!(output, "> ")?;
            output.flush()?;

            let Some(answer) = read_line(input)? else {
                writeln!(output)?;
                return Ok(());
            };
            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Battle) => self.battle_rival(output)?,
                Some(MenuChoice::Catch) => self.encounter_wild(input, output)?,
                Some(MenuChoice::UseItem) => self.use_item(input, output)?,
                Some(MenuChoice::Save) => self.save(output)?,
                Some(MenuChoice::Load) => self.load(output)?,
                Some(MenuChoice::Exit) => {
                    writeln!(output, "Goodbye, {}!", self.player.name)?;
                    return Ok(());
                }
                None => writeln!(output, "Invalid choice '{}'. Pick a number from 1 to 6.", answer)?,
            }
        }
    }

    fn show_summary<W: Write>(&self, output: &mut W) -> GameResult<()> {
        writeln!(output)?;
        writeln!(
            output,
            "== {} | badges: {} | items: {} ==",
            self.player.name,
            self.player.badges.len(),
            self.player.inventory.len()
        )?;
        if self.player.team.is_empty() {
            writeln!(output, "  (no creatures)")?;
        }
        for creature in &self.player.team {
            writeln!(output, "  {}", creature)?;
        }
        Ok(())
    }

    fn battle_rival<W: Write>(&mut self, output: &mut W) -> GameResult<()> {
        // The rival's team is rebuilt for every battle; badges it already
        // lost stay lost.
        self.rival.team = self.config.create_rival()?.team;
        writeln!(output, "{} challenges {}!", self.player.name, self.rival.name)?;

        let report = self.player.battle(&mut self.rival, self.rng.as_mut())?;
        for line in report.narrate() {
            writeln!(output, "{}", line)?;
        }
        if report.challenger_won() {
            writeln!(output, "You won in {} round(s).", report.rounds)?;
        } else {
            writeln!(
                output,
                "You lost to {}. All of your creatures fainted.",
                report.winner_name()
            )?;
        }
        Ok(())
    }

    fn encounter_wild<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> GameResult<()> {
        let wild = self.config.random_wild_encounter(self.rng.as_mut())?;
        writeln!(output, "A wild {} appeared!", wild.name)?;
        write!(output, "{}", wild.stat_sheet())?;
        writeln!(output, "Choose a capture device:")?;
        for (i, device) in CaptureDevice::ALL.iter().enumerate() {
            writeln!(
                output,
                "{}. {} ({:.0}% success)",
                i + 1,
                device,
                device.success_probability() * 100.0
            )?;
        }
        write!(output, "> ")?;
        output.flush()?;

        let answer = read_line(input)?.unwrap_or_default();
        let device = CaptureDevice::from_choice(&answer);
        let outcome = self.player.catch_pokemon(wild, device, self.rng.as_mut());
        writeln!(output, "{}", outcome)?;
        if outcome.is_success() {
            writeln!(output, "Your team now has {} creature(s).", self.player.team.len())?;
        }
        Ok(())
    }

    fn use_item<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> GameResult<()> {
        if self.player.inventory.is_empty() {
            writeln!(output, "Your bag is empty.")?;
            return Ok(());
        }
        let names: Vec<String> = self
            .player
            .item_counts()
            .iter()
            .map(|(item, _)| item.name.clone())
            .collect();
        writeln!(output, "Which item?")?;
        for (i, (item, count)) in self.player.item_counts().iter().enumerate() {
            writeln!(output, "{}. {} x{}", i + 1, item, count)?;
        }
        write!(output, "> ")?;
        output.flush()?;
        let answer = read_line(input)?.unwrap_or_default();
        // Accept either the list number or the item's name.
        let item_name = match parse_index(&answer, names.len()) {
            Some(index) => names[index].clone(),
            None => answer,
        };

        writeln!(output, "Use it on which creature?")?;
        for (i, creature) in self.player.team.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, creature)?;
        }
        write!(output, "> ")?;
        output.flush()?;
        let answer = read_line(input)?.unwrap_or_default();
        // Anything unparsable becomes an out-of-range index.
        let target_index = parse_index(&answer, self.player.team.len()).unwrap_or(usize::MAX);

        match self.player.use_item(&item_name, target_index) {
            ItemUseOutcome::Used {
                item,
                target,
                outcome,
            } => {
                if outcome.changed_target() {
                    writeln!(output, "You used {}. {} {}.", item, target, outcome)?;
                } else {
                    writeln!(output, "You used {} on {}, but {}.", item, target, outcome)?;
                }
            }
            ItemUseOutcome::NotFound { item } => {
                writeln!(output, "Item '{}' not found.", item)?;
            }
            ItemUseOutcome::InvalidTarget { .. } => {
                writeln!(output, "That is not a creature on your team.")?;
            }
        }
        Ok(())
    }

    // A failed save or load is reported and the menu carries on; the player
    // in memory is left untouched.
    fn save<W: Write>(&self, output: &mut W) -> GameResult<()> {
        match save_game(&self.player, &self.save_path) {
            Ok(()) => writeln!(output, "Game saved.")?,
            Err(err) => {
                log::warn!("Saving to {} failed: {}", self.save_path.display(), err);
                writeln!(output, "Could not save: {}", err)?;
            }
        }
        Ok(())
    }

    fn load<W: Write>(&mut self, output: &mut W) -> GameResult<()> {
        match load_game(&self.save_path) {
            Ok(Some(trainer)) => {
                self.player = trainer;
                writeln!(output, "Game loaded. Welcome back, {}!", self.player.name)?;
            }
            Ok(None) => writeln!(output, "No saved game found.")?,
            Err(err) => {
                log::warn!("Loading {} failed: {}", self.save_path.display(), err);
                writeln!(output, "Save file could not be read: {}", err)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{Creature, Stats};
    use crate::moves::Move;
    use crate::rng::ScriptedRng;
    use pretty_assertions::assert_eq;
    use schema::{MoveCategory, PokemonType};
    use std::io::Cursor;
    use tempfile::{tempdir, TempDir};

    fn session_with(player: Trainer, rolls: Vec<f64>) -> (Session, TempDir) {
        let dir = tempdir().unwrap();
        let session = Session::new(
            GameConfig::default(),
            player,
            dir.path().join("save.bin"),
            Box::new(ScriptedRng::new_for_test(rolls)),
        )
        .unwrap();
        (session, dir)
    }

    fn default_player() -> Trainer {
        GameConfig::default().create_player("Red", "Squirtle").unwrap()
    }

    fn run(session: &mut Session, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        session.run(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Battle));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("battle"), None);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (mut session, _dir) = session_with(default_player(), vec![]);
        let before = session.player.clone();

        let output = run(&mut session, "9\nabc\n6\n");

        assert_eq!(output.matches("Invalid choice").count(), 2);
        assert_eq!(output.matches("1. Battle").count(), 3);
        assert!(output.contains("Goodbye, Red!"));
        assert_eq!(session.player, before);
    }

    #[test]
    fn test_closed_input_exits() {
        let (mut session, _dir) = session_with(default_player(), vec![]);
        let output = run(&mut session, "");
        assert!(output.contains("6. Exit"));
    }

    #[test]
    fn test_load_without_save_keeps_player() {
        let (mut session, _dir) = session_with(default_player(), vec![]);
        let before = session.player.clone();

        let output = run(&mut session, "5\n6\n");

        assert!(output.contains("No saved game found."));
        assert_eq!(session.player, before);
    }

    #[test]
    fn test_save_then_load_restores_inventory() {
        let (mut session, _dir) = session_with(default_player(), vec![]);
        let before = session.player.clone();

        // Save, drink a Potion on creature 1, then load the save back.
        let output = run(&mut session, "4\n3\n1\n1\n5\n6\n");

        assert!(output.contains("Game saved."));
        assert!(output.contains("You used Potion on Squirtle, but it had no effect."));
        assert!(output.contains("Game loaded."));
        assert_eq!(session.player, before);
    }

    #[test]
    fn test_failed_save_returns_to_menu() {
        let dir = tempdir().unwrap();
        // A directory cannot be written as a file.
        let mut session = Session::new(
            GameConfig::default(),
            default_player(),
            dir.path().to_path_buf(),
            Box::new(ScriptedRng::new_for_test(vec![])),
        )
        .unwrap();

        let output = run(&mut session, "4\n6\n");

        assert!(output.contains("Could not save:"));
        assert!(!output.contains("Game saved."));
        assert!(output.contains("Goodbye, Red!"));
    }

    #[test]
    fn test_corrupt_save_keeps_current_player() {
        let (mut session, dir) = session_with(default_player(), vec![]);
        std::fs::write(dir.path().join("save.bin"), [0xff, 0xff]).unwrap();
        let before = session.player.clone();

        let output = run(&mut session, "5\n6\n");

        assert!(output.contains("Save file could not be read:"));
        assert!(output.contains("Goodbye, Red!"));
        assert_eq!(session.player, before);
    }

    #[test]
    fn test_use_item_by_name_and_missing_item() {
        let mut player = default_player();
        player.team[0].take_damage(30);
        let (mut session, _dir) = session_with(player, vec![]);

        let output = run(&mut session, "3\nSuper Potion\n1\n3\nMax Revive\n1\n6\n");

        assert!(output.contains("You used Super Potion. Squirtle recovered 30 HP."));
        assert!(output.contains("Item 'Max Revive' not found."));
        assert_eq!(session.player.team[0].health(), 44);
        assert_eq!(session.player.inventory.len(), 4);
    }

    #[test]
    fn test_use_item_on_bad_target() {
        let (mut session, _dir) = session_with(default_player(), vec![]);

        let output = run(&mut session, "3\n1\n9\n6\n");

        assert!(output.contains("That is not a creature on your team."));
        assert_eq!(session.player.inventory.len(), 5);
    }

    #[test]
    fn test_catch_through_menu() {
        // First roll picks Pidgey from the wild pool, second is the capture roll.
        let (mut session, _dir) = session_with(default_player(), vec![0.0, 0.1]);

        let output = run(&mut session, "2\n3\n6\n");

        assert!(output.contains("A wild Pidgey appeared!"));
        assert!(output.contains("Gotcha! Pidgey was caught in the Ultra Ball!"));
        assert!(output.contains("Your team now has 2 creature(s)."));
        assert_eq!(session.player.team.len(), 2);
        assert_eq!(session.player.team[1].name, "Pidgey");
    }

    #[test]
    fn test_catch_with_invalid_device_fails() {
        let (mut session, _dir) = session_with(default_player(), vec![0.0]);

        let output = run(&mut session, "2\n7\n6\n");

        assert!(output.contains("got away"));
        assert!(!output.contains("Your team now has"));
        assert_eq!(session.player.team.len(), 1);
    }

    #[test]
    fn test_battle_through_menu_wins_badge() {
        let champion = Creature::new(
            "Mewtwo",
            PokemonType::Normal,
            200,
            Stats::new(200, 200, 200, 200, 200),
            50,
            vec![Move::new("Psystrike", MoveCategory::Special, 200, 1.0)],
        );
        let (mut session, _dir) = session_with(Trainer::with_team("Red", vec![champion]), vec![0.0, 0.5, 0.0, 0.5]);

        let output = run(&mut session, "1\n6\n");

        assert!(output.contains("Red challenges Brock!"));
        assert!(output.contains("Brock handed over the Boulder Badge!"));
        assert!(output.contains("You won in 2 round(s)."));
        assert_eq!(session.player.badges, vec!["Boulder Badge".to_string()]);
        assert!(session.rival.badges.is_empty());
    }

    #[test]
    fn test_battle_with_empty_team_is_lost() {
        let (mut session, _dir) = session_with(Trainer::new("Red"), vec![]);

        let output = run(&mut session, "1\n6\n");

        assert!(output.contains("Brock won the battle!"));
        assert!(output.contains("You lost to Brock."));
    }

    #[test]
    fn test_choose_starter_reprompts_on_invalid_answer() {
        let config = GameConfig::default();
        let mut input = Cursor::new(b"5\nfoo\n2\n".to_vec());
        let mut output = Vec::new();

        let trainer = choose_starter(&config, "Red", &mut input, &mut output)
            .unwrap()
            .expect("a starter should be chosen");

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid choice").count(), 2);
        assert_eq!(trainer.team[0].name, "Charmander");
        assert_eq!(trainer.inventory.len(), 5);
    }

    #[test]
    fn test_choose_starter_on_closed_input() {
        let config = GameConfig::default();
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(choose_starter(&config, "Red", &mut input, &mut output).unwrap(), None);
    }
}
