//! Tests for FSM AI components.

#[cfg(test)]
mod tests {
    use super::super::fsm::VehicleAiState;

    #[test]
    fn test_state_default() {
        let state = VehicleAiState::default();
        assert!(matches!(state, VehicleAiState::Patrol));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(VehicleAiState::Patrol.name(), "Patrol");
        assert_eq!(VehicleAiState::Chase.name(), "Chase");
        assert_eq!(VehicleAiState::Ram { elapsed: 0.3 }.name(), "Ram");
        assert_eq!(VehicleAiState::Recover.name(), "Recover");
    }

    #[test]
    fn test_ram_elapsed_accumulator() {
        // Ram тикает elapsed до ram_duration (1.0s при 60Hz = 60 тиков)
        let mut state = VehicleAiState::Ram { elapsed: 0.0 };
        let delta = 1.0 / 60.0;
        let duration = 1.0;

        let mut ticks = 0;
        while let VehicleAiState::Ram { elapsed } = state {
            if elapsed >= duration {
                state = VehicleAiState::Recover;
                break;
            }
            state = VehicleAiState::Ram {
                elapsed: elapsed + delta,
            };
            ticks += 1;
        }

        assert!(matches!(state, VehicleAiState::Recover));
        assert_eq!(ticks, 60);
    }
}
