pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod solutions;

pub use config::Config;
pub use error::{Error, Result};

/// Available problem IDs, ascending
pub const PROBLEMS: &[u32] = &[
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
    25, 26, 27, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 46, 47, 48,
    49, 50, 52, 53, 54, 55, 56, 57, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70,
    71, 72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90,
    91, 92, 93, 95, 96, 97, 98, 99,
];

/// Run a specific problem and return the answer.
///
/// Returns `None` for problems that are not implemented.
pub fn run_problem(id: u32, config: &Config) -> Option<Result<String>> {
    let answer = match id {
        1 => Ok(solutions::pe1::solve()),
        2 => Ok(solutions::pe2::solve()),
        3 => Ok(solutions::pe3::solve()),
        4 => Ok(solutions::pe4::solve()),
        5 => Ok(solutions::pe5::solve()),
        6 => Ok(solutions::pe6::solve()),
        7 => Ok(solutions::pe7::solve()),
        8 => Ok(solutions::pe8::solve()),
        9 => solutions::pe9::solve(),
        10 => Ok(solutions::pe10::solve()),
        12 => Ok(solutions::pe12::solve()),
        14 => Ok(solutions::pe14::solve()),
        15 => Ok(solutions::pe15::solve()),
        16 => Ok(solutions::pe16::solve()),
        17 => Ok(solutions::pe17::solve()),
        18 => solutions::pe18::solve(),
        19 => Ok(solutions::pe19::solve()),
        20 => Ok(solutions::pe20::solve()),
        21 => Ok(solutions::pe21::solve()),
        22 => solutions::pe22::solve(&config.data_dir),
        23 => Ok(solutions::pe23::solve()),
        24 => Ok(solutions::pe24::solve()),
        25 => Ok(solutions::pe25::solve()),
        26 => Ok(solutions::pe26::solve()),
        27 => Ok(solutions::pe27::solve()),
        30 => Ok(solutions::pe30::solve()),
        31 => Ok(solutions::pe31::solve()),
        32 => Ok(solutions::pe32::solve()),
        33 => Ok(solutions::pe33::solve()),
        34 => Ok(solutions::pe34::solve()),
        35 => Ok(solutions::pe35::solve()),
        36 => Ok(solutions::pe36::solve()),
        37 => Ok(solutions::pe37::solve()),
        38 => Ok(solutions::pe38::solve()),
        39 => Ok(solutions::pe39::solve()),
        40 => Ok(solutions::pe40::solve()),
        41 => solutions::pe41::solve(),
        42 => solutions::pe42::solve(&config.data_dir),
        43 => Ok(solutions::pe43::solve()),
        46 => solutions::pe46::solve(),
        47 => solutions::pe47::solve(),
        48 => Ok(solutions::pe48::solve()),
        49 => Ok(solutions::pe49::solve()),
        50 => Ok(solutions::pe50::solve()),
        52 => solutions::pe52::solve(),
        53 => Ok(solutions::pe53::solve()),
        54 => solutions::pe54::solve(&config.data_dir),
        55 => Ok(solutions::pe55::solve()),
        56 => Ok(solutions::pe56::solve()),
        57 => Ok(solutions::pe57::solve()),
        59 => solutions::pe59::solve(&config.data_dir),
        60 => solutions::pe60::solve(),
        61 => solutions::pe61::solve(),
        62 => Ok(solutions::pe62::solve()),
        63 => Ok(solutions::pe63::solve()),
        64 => Ok(solutions::pe64::solve()),
        65 => Ok(solutions::pe65::solve()),
        66 => Ok(solutions::pe66::solve()),
        67 => solutions::pe67::solve(&config.data_dir),
        68 => Ok(solutions::pe68::solve()),
        69 => Ok(solutions::pe69::solve()),
        70 => solutions::pe70::solve(),
        71 => Ok(solutions::pe71::solve()),
        72 => Ok(solutions::pe72::solve()),
        73 => Ok(solutions::pe73::solve()),
        74 => Ok(solutions::pe74::solve()),
        75 => Ok(solutions::pe75::solve()),
        76 => Ok(solutions::pe76::solve()),
        77 => solutions::pe77::solve(),
        78 => Ok(solutions::pe78::solve()),
        79 => solutions::pe79::solve(&config.data_dir),
        80 => Ok(solutions::pe80::solve()),
        81 => solutions::pe81::solve(&config.data_dir),
        82 => solutions::pe82::solve(&config.data_dir),
        83 => solutions::pe83::solve(&config.data_dir),
        84 => Ok(solutions::pe84::solve()),
        85 => Ok(solutions::pe85::solve()),
        86 => Ok(solutions::pe86::solve()),
        87 => Ok(solutions::pe87::solve()),
        88 => Ok(solutions::pe88::solve()),
        89 => solutions::pe89::solve(&config.data_dir),
        90 => Ok(solutions::pe90::solve()),
        91 => Ok(solutions::pe91::solve()),
        92 => Ok(solutions::pe92::solve()),
        93 => Ok(solutions::pe93::solve()),
        95 => Ok(solutions::pe95::solve()),
        96 => solutions::pe96::solve(&config.data_dir),
        97 => Ok(solutions::pe97::solve()),
        98 => solutions::pe98::solve(&config.data_dir),
        99 => solutions::pe99::solve(&config.data_dir),
        _ => return None,
    };
    Some(answer)
}

/// The data file a problem reads from the data directory, if any.
pub fn data_file(id: u32) -> Option<&'static str> {
    Some(match id {
        22 => "names.txt",
        42 => "words.txt",
        54 => "poker.txt",
        59 => "cipher.txt",
        67 => "triangle.txt",
        79 => "keylog.txt",
        81 => "matrix.txt",
        82 => "matrix.txt",
        83 => "matrix.txt",
        89 => "roman.txt",
        96 => "sudoku.txt",
        98 => "anagram_words.txt",
        99 => "base_exp.txt",
        _ => return None,
    })
}
