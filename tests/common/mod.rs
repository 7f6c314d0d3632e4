#![allow(unused)]

use std::fmt::Write;

use rosu_pp_ffi::Beatmap;

/// Amount of circles in [`osu_map`].
pub const N_CIRCLES: u32 = 100;

/// Bit values for mods
pub mod mods {
    pub const NM: u32 = 0;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const DT: u32 = 1 << 6;
}

/// Content of an osu!standard `.osu` file with `n_circles` circles, 250ms
/// apart, and `n_sliders` sliders afterwards.
pub fn osu_content(n_circles: u32, n_sliders: u32) -> String {
    let mut content = String::from(
        "osu file format v14

[General]
StackLeniency: 0.7
Mode: 0

[Difficulty]
HPDrainRate:5
CircleSize:4
OverallDifficulty:8
ApproachRate:9
SliderMultiplier:1.4
SliderTickRate:1

[TimingPoints]
0,500,4,2,0,100,1,0

[HitObjects]
",
    );

    let mut time = 1000;

    for i in 0..n_circles {
        let x = if i % 2 == 0 { 128 } else { 384 };
        let _ = writeln!(content, "{x},192,{time},1,0,0:0:0:0:");
        time += 250;
    }

    for _ in 0..n_sliders {
        let _ = writeln!(content, "100,100,{time},2,0,L|300:100,1,200");
        time += 1000;
    }

    content
}

/// An osu!standard map with [`N_CIRCLES`] circles.
#[track_caller]
pub fn osu_map() -> Beatmap {
    Beatmap::from_bytes(osu_content(N_CIRCLES, 0).as_bytes()).unwrap()
}

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < f64::EPSILON, "{a} != {b}");
}
