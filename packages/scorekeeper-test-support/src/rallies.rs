//! Rally scripts: compact sequences of point winners for scenario tests.
//!
//! A script is a string of `0`/`1` characters, one per rally, naming the team
//! that won it. Whitespace and `,` are ignored so long scripts can be grouped.

/// Parse a rally script into team indices.
///
/// Panics on any character other than `0`, `1`, whitespace or `,`; scripts are
/// test fixtures, so a typo should fail loudly.
pub fn parse(script: &str) -> Vec<u8> {
    script
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '0' => 0,
            '1' => 1,
            other => panic!("invalid rally script character: {other:?}"),
        })
        .collect()
}

/// `count` consecutive rallies won by `team`.
pub fn run(team: u8, count: usize) -> Vec<u8> {
    vec![team; count]
}

/// Alternating rallies starting with `first`, `count` long.
pub fn alternating(first: u8, count: usize) -> Vec<u8> {
    (0..count).map(|i| (first + (i % 2) as u8) % 2).collect()
}
