//! Competition (league meet) coefficients per category.

use super::types::{CompetitionTable, FieldRule, LinearCoefficients, LinearRamp, PiecewiseRule};

const fn pair(a: f64, b: f64) -> LinearCoefficients {
    LinearCoefficients::new(a, b)
}

const fn sqrt(a: f64, b: f64) -> FieldRule {
    FieldRule::Sqrt(LinearCoefficients::new(a, b))
}

pub const WOMEN_HIGH_JUMP_THRESHOLD: f64 = 1.40;
pub const YOUTH_LONG_JUMP_THRESHOLD: f64 = 4.41;
pub const YOUTH_HIGH_JUMP_THRESHOLD: f64 = 1.35;

/// Youth long jump: `(d - 1.91) * 200 + offset` at or below 4.41 m
fn youth_long_jump(above_b: f64, ramp_offset: f64) -> FieldRule {
    FieldRule::Piecewise(PiecewiseRule {
        threshold: YOUTH_LONG_JUMP_THRESHOLD,
        above: pair(887.99, above_b),
        at_or_below: LinearRamp {
            origin: 1.91,
            slope: 200.0,
            offset: ramp_offset,
        },
    })
}

/// Youth high jump: `(h - 0.67) * 733.33333 + offset` at or below 1.35 m
fn youth_high_jump(above_b: f64, ramp_offset: f64) -> FieldRule {
    FieldRule::Piecewise(PiecewiseRule {
        threshold: YOUTH_HIGH_JUMP_THRESHOLD,
        above: pair(1977.53, above_b),
        at_or_below: LinearRamp {
            origin: 0.67,
            slope: 733.33333,
            offset: ramp_offset,
        },
    })
}

/// Men: masters, seniors, U20, U18
pub fn men() -> CompetitionTable {
    CompetitionTable::new(
        "men competition",
        &[
            ("35m", pair(12020.6, 1813.60)),
            ("40m", pair(13826.6, 1860.50)),
            ("50m", pair(16844.4, 1927.10)),
            ("60m", pair(19942.4, 1983.80)),
            ("100m", pair(29550.0, 1881.50)),
            ("150m", pair(38003.1, 1486.00)),
            ("200m", pair(52611.4, 1547.10)),
            ("300m", pair(81710.5, 1473.60)),
            ("400m", pair(111960.0, 1433.50)),
            ("600m", pair(181894.7, 1341.00)),
            ("800m", pair(248544.0, 1323.20)),
            ("1000m", pair(317523.3, 1285.00)),
            ("1500m", pair(489971.4, 1224.70)),
            ("3000m", pair(1077300.0, 1234.90)),
            ("5000m", pair(1786833.9, 1145.00)),
            ("3000m_steeple", pair(1048695.7, 1008.90)),
            ("2000m_steeple", pair(673418.4, 1001.10)),
            ("50m_h", pair(16606.5, 1504.50)),
            ("60m_h", pair(22564.2, 1795.00)),
            ("110m_h", pair(23955.3, 747.90)),
            ("400m_h", pair(96830.9, 912.80)),
            ("4x100m", pair(118175.1, 1880.65)),
            ("4x200m", pair(210287.2, 1545.10)),
            ("4x400m", pair(446880.0, 1429.25)),
            ("zwedse_est", pair(247800.0, 1126.00)),
        ],
        &[
            ("hoog", sqrt(2440.0, 2593.5)),
            ("polsstok", sqrt(1040.0, 1272.5)),
            ("ver", sqrt(1094.4, 2075.3)),
            ("hss", sqrt(762.9, 2074.5)),
            ("kogel", sqrt(462.5, 1001.8)),
            ("discus", sqrt(249.8, 893.5)),
            ("kogelslingeren", sqrt(197.3, 591.8)),
            ("speer", sqrt(190.2, 711.3)),
            ("gewichtwerpen", sqrt(333.5, 539.0)),
        ],
        &[
            "35m", "40m", "50m", "60m", "50m_h", "60m_h", "100m", "150m", "200m", "300m",
            "400m", "4x100m", "4x200m", "4x400m", "zwedse_est", "600m", "800m", "1000m",
            "1500m", "3000m", "5000m", "110m_h", "400m_h", "2000m_steeple", "3000m_steeple",
            "hoog", "polsstok", "ver", "hss", "kogel", "discus", "kogelslingeren", "speer",
            "gewichtwerpen",
        ],
    )
}

/// Women: masters, seniors, U20, U18
pub fn women() -> CompetitionTable {
    CompetitionTable::new(
        "women competition",
        &[
            ("35m", pair(11844.40, 1684.00)),
            ("40m", pair(13289.00, 1592.50)),
            ("50m", pair(16234.10, 1623.70)),
            ("60m", pair(19268.70, 1631.80)),
            ("100m", pair(30672.00, 1682.50)),
            ("150m", pair(40288.40, 1330.00)),
            ("200m", pair(54720.00, 1342.00)),
            ("300m", pair(90616.40, 1307.00)),
            ("400m", pair(111720.00, 1084.50)),
            ("600m", pair(175609.80, 964.10)),
            ("800m", pair(247200.00, 975.50)),
            ("1000m", pair(335842.30, 1034.40)),
            ("1500m", pair(557448.00, 1181.50)),
            ("3000m", pair(1197450.00, 1176.00)),
            ("3000m_steeple", pair(1161602.60, 926.20)),
            ("2000m_steeple", pair(822635.40, 1118.60)),
            ("50m_h", pair(15999.80, 1211.00)),
            ("60m_h", pair(18477.90, 1161.00)),
            ("100m_h", pair(24672.00, 895.50)),
            ("400m_h", pair(112752.00, 925.70)),
            ("4x100m", pair(122328.00, 1677.75)),
            ("4x200m", pair(218613.30, 1340.60)),
            ("4x400m", pair(446803.85, 1084.35)),
            ("zwedse_est", pair(261981.50, 865.00)),
        ],
        &[
            (
                "hoog",
                FieldRule::SplitSqrt {
                    threshold: WOMEN_HIGH_JUMP_THRESHOLD,
                    at_or_below: pair(3039.8, 2981.5),
                    above: pair(2635.6, 2501.5),
                },
            ),
            ("polsstok", sqrt(1225.8, 1500.2)),
            ("ver", sqrt(1076.3, 1729.4)),
            ("hss", sqrt(750.3, 1730.6)),
            ("kogel", sqrt(429.5, 768.3)),
            ("discus", sqrt(224.8, 686.5)),
            ("kogelslingeren", sqrt(183.5, 415.7)),
            ("speer", sqrt(197.5, 482.5)),
            ("gewichtwerpen", sqrt(309.4, 440.0)),
        ],
        &[
            "35m", "40m", "50m", "60m", "50m_h", "60m_h", "100m", "100m_h", "150m", "200m",
            "300m", "400m", "400m_h", "4x100m", "4x200m", "4x400m", "zwedse_est", "600m",
            "800m", "1000m", "1500m", "3000m", "2000m_steeple", "3000m_steeple", "hoog",
            "polsstok", "ver", "hss", "kogel", "discus", "kogelslingeren", "speer",
            "gewichtwerpen",
        ],
    )
}

/// U14 and U16, boys and girls share one table
pub fn youth_u14_u16() -> CompetitionTable {
    CompetitionTable::new(
        "U14/U16 competition",
        &[
            ("30m", pair(8532.0, 1035.00)),
            ("35m", pair(9710.0, 1073.00)),
            ("40m", pair(10834.0, 1096.00)),
            ("50m", pair(13090.0, 1141.50)),
            ("60m", pair(15365.0, 1158.00)),
            ("80m", pair(19933.0, 1193.00)),
            ("100m", pair(24450.0, 1212.00)),
            ("150m", pair(36380.0, 1200.00)),
            ("300m", pair(78286.0, 1204.00)),
            ("600m", pair(160470.5, 911.35)),
            ("800m", pair(216604.8, 884.50)),
            ("1000m", pair(276912.0, 838.50)),
            ("1500m", pair(425682.0, 788.50)),
            ("60m_h_76c", pair(14050.0, 795.50)),
            ("60m_h_84c", pair(13820.0, 714.50)),
            ("4x40m", pair(41050.0, 1053.00)),
            ("4x60m", pair(59225.0, 1130.00)),
            ("4x80m", pair(77325.0, 1168.00)),
            ("4x100m", pair(95150.0, 1189.50)),
        ],
        &[
            ("hoog", youth_high_jump(1798.5, 0.7)),
            ("ver", youth_long_jump(1364.5, 0.5)),
            ("polsstok", sqrt(795.66, 686.5)),
            ("kogel", sqrt(303.73, 437.5)),
            ("discus", sqrt(166.79, 438.5)),
            ("speer", sqrt(170.39, 437.5)),
        ],
        &[
            "30m", "35m", "40m", "50m", "60m", "80m", "100m", "150m", "300m", "600m", "800m",
            "1000m", "1500m", "60m_h_76c", "60m_h_84c", "4x40m", "4x60m", "4x80m", "4x100m",
            "hoog", "polsstok", "ver", "kogel", "discus", "speer",
        ],
    )
}

/// U8, U9, U10 and U12, boys and girls share one table.
///
/// Same multipliers as U14/U16 with every B and ramp offset shifted by 100.
pub fn youth_u8_u12() -> CompetitionTable {
    CompetitionTable::new(
        "U8-U12 competition",
        &[
            ("30m", pair(8532.0, 935.00)),
            ("35m", pair(9710.0, 973.00)),
            ("40m", pair(10834.0, 996.00)),
            ("50m", pair(13090.0, 1041.50)),
            ("60m", pair(15365.0, 1058.00)),
            ("600m", pair(160470.5, 811.35)),
            ("1000m", pair(276912.0, 738.50)),
            ("4x40m", pair(41050.0, 953.00)),
            ("4x60m", pair(59225.0, 1030.00)),
        ],
        &[
            ("hoog", youth_high_jump(1698.5, 100.7)),
            ("ver", youth_long_jump(1264.5, 100.5)),
            ("kogel", sqrt(303.73, 337.5)),
            ("bal", sqrt(126.00, 245.5)),
        ],
        &[
            "30m", "35m", "40m", "50m", "60m", "600m", "1000m", "4x40m", "4x60m", "hoog",
            "ver", "kogel", "bal",
        ],
    )
}
