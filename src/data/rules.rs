//! Built-in recurring holidays, one generation per amendment of 国民の祝日に関する法律,
//! and the one-off holidays enacted by special laws.
//!
//! Each generation lists every recurring holiday in force, not a delta
//! against the previous one. The equinox days are not listed; they are
//! computed for every year a generation is in force.

use std::sync::LazyLock;

use chrono::{NaiveDate, Weekday};

use crate::holiday::Holiday;
use crate::time::calendar::specialholidays::SpecialHolidayTable;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::nthweekdayholiday::NthWeekdayHoliday;
use crate::time::recurringholiday::rulegeneration::{RuleGeneration, RuleSet};

/// `(month, day, name)`
type FixedRow = (u32, u32, &'static str);

/// `(month, n, weekday, name)`, `n` counting from 1.
type WeekdayRow = (u32, u8, Weekday, &'static str);

struct GenerationRows {
    effective_from_year: i32,
    fixed: &'static [FixedRow],
    weekday: &'static [WeekdayRow]
}

#[rustfmt::skip]
static RULE_GENERATIONS: &[GenerationRows] = &[
    GenerationRows {
        effective_from_year: 1949,
        fixed: &[
            (1, 1, "元日"), (1, 15, "成人の日"), (4, 29, "天皇誕生日"), (5, 3, "憲法記念日"),
            (5, 5, "こどもの日"), (11, 3, "文化の日"), (11, 23, "勤労感謝の日"),
        ],
        weekday: &[]
    },
    GenerationRows {
        effective_from_year: 1966,
        fixed: &[
            (1, 1, "元日"), (1, 15, "成人の日"), (4, 29, "天皇誕生日"), (5, 3, "憲法記念日"),
            (5, 5, "こどもの日"), (9, 15, "敬老の日"), (10, 10, "体育の日"), (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"),
        ],
        weekday: &[]
    },
    GenerationRows {
        effective_from_year: 1967,
        fixed: &[
            (1, 1, "元日"), (1, 15, "成人の日"), (2, 11, "建国記念の日"), (4, 29, "天皇誕生日"),
            (5, 3, "憲法記念日"), (5, 5, "こどもの日"), (9, 15, "敬老の日"), (10, 10, "体育の日"),
            (11, 3, "文化の日"), (11, 23, "勤労感謝の日"),
        ],
        weekday: &[]
    },
    GenerationRows {
        effective_from_year: 1989,
        fixed: &[
            (1, 1, "元日"), (1, 15, "成人の日"), (2, 11, "建国記念の日"), (4, 29, "みどりの日"),
            (5, 3, "憲法記念日"), (5, 5, "こどもの日"), (9, 15, "敬老の日"), (10, 10, "体育の日"),
            (11, 3, "文化の日"), (11, 23, "勤労感謝の日"), (12, 23, "天皇誕生日"),
        ],
        weekday: &[]
    },
    GenerationRows {
        effective_from_year: 1996,
        fixed: &[
            (1, 1, "元日"), (1, 15, "成人の日"), (2, 11, "建国記念の日"), (4, 29, "みどりの日"),
            (5, 3, "憲法記念日"), (5, 5, "こどもの日"), (7, 20, "海の日"), (9, 15, "敬老の日"),
            (10, 10, "体育の日"), (11, 3, "文化の日"), (11, 23, "勤労感謝の日"), (12, 23, "天皇誕生日"),
        ],
        weekday: &[]
    },
    GenerationRows {
        effective_from_year: 2000,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (4, 29, "みどりの日"), (5, 3, "憲法記念日"),
            (5, 5, "こどもの日"), (7, 20, "海の日"), (9, 15, "敬老の日"), (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"), (12, 23, "天皇誕生日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (10, 2, Weekday::Mon, "体育の日"),
        ]
    },
    GenerationRows {
        effective_from_year: 2003,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (4, 29, "みどりの日"), (5, 3, "憲法記念日"),
            (5, 5, "こどもの日"), (11, 3, "文化の日"), (11, 23, "勤労感謝の日"), (12, 23, "天皇誕生日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (7, 3, Weekday::Mon, "海の日"),
            (9, 3, Weekday::Mon, "敬老の日"), (10, 2, Weekday::Mon, "体育の日"),
        ]
    },
    GenerationRows {
        effective_from_year: 2007,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (4, 29, "昭和の日"), (5, 3, "憲法記念日"),
            (5, 4, "みどりの日"), (5, 5, "こどもの日"), (11, 3, "文化の日"), (11, 23, "勤労感謝の日"),
            (12, 23, "天皇誕生日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (7, 3, Weekday::Mon, "海の日"),
            (9, 3, Weekday::Mon, "敬老の日"), (10, 2, Weekday::Mon, "体育の日"),
        ]
    },
    GenerationRows {
        effective_from_year: 2016,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (4, 29, "昭和の日"), (5, 3, "憲法記念日"),
            (5, 4, "みどりの日"), (5, 5, "こどもの日"), (8, 11, "山の日"), (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"), (12, 23, "天皇誕生日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (7, 3, Weekday::Mon, "海の日"),
            (9, 3, Weekday::Mon, "敬老の日"), (10, 2, Weekday::Mon, "体育の日"),
        ]
    },
    // Abdication year: no emperor's birthday at all.
    GenerationRows {
        effective_from_year: 2019,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (4, 29, "昭和の日"), (5, 3, "憲法記念日"),
            (5, 4, "みどりの日"), (5, 5, "こどもの日"), (8, 11, "山の日"), (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (7, 3, Weekday::Mon, "海の日"),
            (9, 3, Weekday::Mon, "敬老の日"), (10, 2, Weekday::Mon, "体育の日"),
        ]
    },
    // Olympic years 2020 and 2021: 海の日, 山の日 and スポーツの日 were moved by
    // special law and come from SPECIAL_HOLIDAYS instead.
    GenerationRows {
        effective_from_year: 2020,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (2, 23, "天皇誕生日"), (4, 29, "昭和の日"),
            (5, 3, "憲法記念日"), (5, 4, "みどりの日"), (5, 5, "こどもの日"), (11, 3, "文化の日"),
            (11, 23, "勤労感謝の日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (9, 3, Weekday::Mon, "敬老の日"),
        ]
    },
    GenerationRows {
        effective_from_year: 2022,
        fixed: &[
            (1, 1, "元日"), (2, 11, "建国記念の日"), (2, 23, "天皇誕生日"), (4, 29, "昭和の日"),
            (5, 3, "憲法記念日"), (5, 4, "みどりの日"), (5, 5, "こどもの日"), (8, 11, "山の日"),
            (11, 3, "文化の日"), (11, 23, "勤労感謝の日"),
        ],
        weekday: &[
            (1, 2, Weekday::Mon, "成人の日"), (7, 3, Weekday::Mon, "海の日"),
            (9, 3, Weekday::Mon, "敬老の日"), (10, 2, Weekday::Mon, "スポーツの日"),
        ]
    },
];

/// `(year, month, day, name)`
#[rustfmt::skip]
static SPECIAL_HOLIDAYS: &[(i32, u32, u32, &str)] = &[
    (1959, 4, 10, "結婚の儀"),
    (1989, 2, 24, "大喪の礼"),
    (1990, 11, 12, "即位礼正殿の儀"),
    (1993, 6, 9, "結婚の儀"),
    (2019, 5, 1, "休日（祝日扱い）"),
    (2019, 10, 22, "休日（祝日扱い）"),
    (2020, 7, 23, "海の日"),
    (2020, 7, 24, "スポーツの日"),
    (2020, 8, 10, "山の日"),
    (2021, 7, 22, "海の日"),
    (2021, 7, 23, "スポーツの日"),
    (2021, 8, 8, "山の日"),
];

fn build_generation(rows: &GenerationRows) -> RuleGeneration {
    let fixed = rows.fixed
        .iter()
        .map(|&(month, day, name)| {
            FixedDateHoliday::new(month, day, name).expect("built-in fixed-date rule is valid")
        })
        .collect();
    let weekday = rows.weekday
        .iter()
        .map(|&(month, n, weekday, name)| {
            NthWeekdayHoliday::new(month, n, weekday, name).expect("built-in weekday rule is valid")
        })
        .collect();
    RuleGeneration::new(rows.effective_from_year, fixed, weekday)
}

static BUILTIN_RULE_SET: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(RULE_GENERATIONS.iter().map(build_generation).collect())
        .expect("built-in generations start in distinct years")
});

static BUILTIN_SPECIAL_HOLIDAYS: LazyLock<SpecialHolidayTable> = LazyLock::new(|| {
    let holidays = SPECIAL_HOLIDAYS
        .iter()
        .map(|&(y, m, d, name)| {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("built-in special holiday is a valid date");
            Holiday::new(date, name)
        })
        .collect();
    SpecialHolidayTable::new(holidays).expect("built-in special holidays fall on distinct days")
});

pub fn builtin_rule_set() -> &'static RuleSet {
    &BUILTIN_RULE_SET
}

pub fn builtin_special_holidays() -> &'static SpecialHolidayTable {
    &BUILTIN_SPECIAL_HOLIDAYS
}
