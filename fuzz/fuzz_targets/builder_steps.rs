#![no_main]

use ferrous_provision::{BuildState, CarBuilder, Engine, Gps, SoundSystem, VehicleBuilder};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut builder = CarBuilder::new();

    for byte in data {
        match byte % 7 {
            0 => {
                builder.set_engine(Engine::new(f64::from(*byte) / 10.0));
            }
            1 => {
                builder.set_seats(*byte);
            }
            2 => {
                builder.set_gps(Gps::default());
            }
            3 => {
                builder.set_sunroof(byte % 2 == 0);
            }
            4 => {
                builder.set_sound_system(SoundSystem::Premium { speakers: *byte });
            }
            5 => {
                let _ = builder.build();
                assert_eq!(builder.state(), BuildState::Complete);
            }
            _ => {
                builder.reset();
                assert_eq!(builder.state(), BuildState::Empty);
            }
        }
    }
});
