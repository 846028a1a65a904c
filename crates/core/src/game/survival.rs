use super::*;

impl Game {
    /// Advances the turn counter and applies hunger, then starvation damage.
    pub(super) fn tick_survival(&mut self) {
        let interval = self.config.survival.hunger_interval;
        let player = &mut self.player;
        player.turns += 1;

        if player.hunger == 0 {
            player.health = player.health.saturating_sub(1);
            self.log.push(LogEvent::HealthDropped { health: player.health });
        } else if player.turns % interval == 0 {
            player.hunger -= 1;
            self.log.push(LogEvent::HungerDropped { hunger: player.hunger });
        }

        if !player.is_alive() && self.outcome.is_none() {
            let outcome = RunOutcome::Defeat(DeathCause::Starvation);
            self.outcome = Some(outcome);
            self.log.push(LogEvent::RunEnded { outcome });
            info!(turns = player.turns, depth = self.level.depth, "run ended by starvation");
        }
    }
}
