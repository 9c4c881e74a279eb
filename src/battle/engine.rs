use crate::battle::events::{BattleEvent, BattleReport, Side};
use crate::creature::{AttackOutcome, Creature};
use crate::errors::{GameError, GameResult};
use crate::rng::RandomSource;
use crate::trainer::Trainer;

// Experience awarded per level of a knocked-out creature.
pub const EXPERIENCE_PER_DEFEATED_LEVEL: u32 = 5;

/// The phases of one battle. Each round walks through them in order; the
/// opponent's move and the attacker's faint check are skipped when the
/// opponent's creature goes down first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    RoundStart,
    PlayerMove,
    CheckOpponentFaint,
    OpponentMove,
    CheckPlayerFaint,
    BattleEnd(Side),
}

/// Resolve a full battle between the front creatures of both teams.
///
/// The challenger always attacks first. Fainted creatures are removed from
/// their team, and the battle ends as soon as either team is empty. Both
/// trainers are mutated in place.
pub fn run_battle(
    challenger: &mut Trainer,
    defender: &mut Trainer,
    rng: &mut dyn RandomSource,
) -> GameResult<BattleReport> {
    let mut events = Vec::new();
    let mut rounds = 0;
    let mut phase = BattlePhase::RoundStart;

    log::info!("Battle started: {} vs {}", challenger.name, defender.name);

    // Every phase after RoundStart may index team[0]: RoundStart only moves
    // on when both teams are non-empty, and a creature is removed only in the
    // faint checks, which hand control straight back to RoundStart.
    let winner = loop {
        phase = match phase {
            BattlePhase::RoundStart => {
                if challenger.team.is_empty() {
                    BattlePhase::BattleEnd(Side::Defender)
                } else if defender.team.is_empty() {
                    BattlePhase::BattleEnd(Side::Challenger)
                } else {
                    rounds += 1;
                    events.push(BattleEvent::RoundStarted { round: rounds });
                    BattlePhase::PlayerMove
                }
            }
            BattlePhase::PlayerMove => {
                execute_attack(
                    Side::Challenger,
                    &challenger.team[0],
                    &mut defender.team[0],
                    rng,
                    &mut events,
                )?;
                BattlePhase::CheckOpponentFaint
            }
            BattlePhase::CheckOpponentFaint => {
                if defender.team[0].is_fainted() {
                    let fainted = defender.team.remove(0);
                    events.push(BattleEvent::CreatureFainted {
                        side: Side::Defender,
                        creature: fainted.name.clone(),
                    });
                    award_experience(&mut challenger.team[0], &fainted, &mut events);
                    BattlePhase::RoundStart
                } else {
                    BattlePhase::OpponentMove
                }
            }
            BattlePhase::OpponentMove => {
                execute_attack(
                    Side::Defender,
                    &defender.team[0],
                    &mut challenger.team[0],
                    rng,
                    &mut events,
                )?;
                BattlePhase::CheckPlayerFaint
            }
            BattlePhase::CheckPlayerFaint => {
                if challenger.team[0].is_fainted() {
                    let fainted = challenger.team.remove(0);
                    events.push(BattleEvent::CreatureFainted {
                        side: Side::Challenger,
                        creature: fainted.name,
                    });
                }
                BattlePhase::RoundStart
            }
            BattlePhase::BattleEnd(winner) => break winner,
        };
    };

    events.push(BattleEvent::BattleEnded { winner });

    let badge = if winner == Side::Challenger {
        transfer_badge(challenger, defender, &mut events)
    } else {
        None
    };

    log::info!(
        "Battle finished after {} round(s); winner: {}",
        rounds,
        match winner {
            Side::Challenger => &challenger.name,
            Side::Defender => &defender.name,
        }
    );

    Ok(BattleReport {
        names: [challenger.name.clone(), defender.name.clone()],
        winner,
        rounds,
        events,
        badge,
    })
}

/// One attack with a uniformly chosen move from the attacker's list.
fn execute_attack(
    side: Side,
    attacker: &Creature,
    defender: &mut Creature,
    rng: &mut dyn RandomSource,
    events: &mut Vec<BattleEvent>,
) -> GameResult<()> {
    if attacker.moves.is_empty() {
        return Err(GameError::NoMovesKnown {
            creature: attacker.name.clone(),
        });
    }
    let move_index = rng.choose_index(attacker.moves.len(), "move selection");
    let move_ = &attacker.moves[move_index];

    events.push(BattleEvent::MoveUsed {
        side,
        creature: attacker.name.clone(),
        move_name: move_.name.clone(),
    });

    match attacker.attack_opponent(defender, move_, rng)? {
        AttackOutcome::Missed => {
            events.push(BattleEvent::MoveMissed {
                side,
                creature: attacker.name.clone(),
            });
        }
        AttackOutcome::Hit { damage, effect, .. } => {
            events.push(BattleEvent::DamageDealt {
                target: defender.name.clone(),
                damage,
                remaining_health: defender.health(),
            });
            if effect.changed_target() {
                events.push(BattleEvent::EffectApplied {
                    target: defender.name.clone(),
                    outcome: effect,
                });
            }
        }
    }
    Ok(())
}

fn award_experience(winner: &mut Creature, defeated: &Creature, events: &mut Vec<BattleEvent>) {
    let amount = defeated
        .level()
        .saturating_mul(EXPERIENCE_PER_DEFEATED_LEVEL);
    let levels_gained = winner.gain_experience(amount);
    events.push(BattleEvent::ExperienceGained {
        creature: winner.name.clone(),
        amount,
        levels_gained,
        new_level: winner.level(),
    });
}

/// Move the loser's first badge to the end of the winner's list. A loser
/// without badges simply hands nothing over.
fn transfer_badge(
    winner: &mut Trainer,
    loser: &mut Trainer,
    events: &mut Vec<BattleEvent>,
) -> Option<String> {
    if loser.badges.is_empty() {
        log::warn!("{} has no badge to hand over to {}", loser.name, winner.name);
        events.push(BattleEvent::NoBadgeToTransfer);
        return None;
    }
    let badge = loser.badges.remove(0);
    log::info!("{} earned the {}", winner.name, badge);
    winner.badges.push(badge.clone());
    events.push(BattleEvent::BadgeTransferred {
        badge: badge.clone(),
    });
    Some(badge)
}
