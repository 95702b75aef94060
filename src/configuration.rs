use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::FixedOffset;
use serde::Deserialize;
use tracing::info;

use crate::astronomy::equinox::JST_OFFSET_SECONDS;
use crate::data::rules::{builtin_rule_set, builtin_special_holidays};
use crate::loader::loadererror::LoaderError;
use crate::loader::ruleloader::{rule_set_from_json, special_holidays_from_json};
use crate::loader::syukujitsucsv::parse_syukujitsu_csv;
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::holidaycalculator::HolidayCalculator;
use crate::time::calendar::japancalendar::{Coverage, JapanHolidayCalendar};
use crate::time::calendar::statictable::StaticHolidayTable;

fn default_time_zone_offset_seconds() -> i32 {
    JST_OFFSET_SECONDS
}

/// Data sources and options of the lookup engine. Every field is optional
/// in JSON; an absent field falls back to the embedded data.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Configuration {
    /// Offset east of UTC at which equinox days are observed.
    #[serde(default = "default_time_zone_offset_seconds")]
    pub time_zone_offset_seconds: i32,
    #[serde(default)]
    pub coverage: Coverage,
    /// UTF-8 `syukujitsu.csv` replacing the embedded table.
    #[serde(default)]
    pub static_table_csv: Option<PathBuf>,
    #[serde(default)]
    pub rule_generations: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub special_holidays: Option<Vec<serde_json::Value>>
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            time_zone_offset_seconds: default_time_zone_offset_seconds(),
            coverage: Coverage::default(),
            static_table_csv: None,
            rule_generations: None,
            special_holidays: None
        }
    }
}

impl Configuration {
    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, LoaderError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        Ok(configuration)
    }

    pub fn time_zone(&self) -> Result<FixedOffset, CalendarError> {
        FixedOffset::east_opt(self.time_zone_offset_seconds)
            .ok_or(CalendarError::InvalidTimeZoneOffset(self.time_zone_offset_seconds))
    }

    fn static_table(&self) -> Result<Arc<StaticHolidayTable>, LoaderError> {
        match &self.static_table_csv {
            Some(path) => {
                let reader = BufReader::new(File::open(path)?);
                let holidays = parse_syukujitsu_csv(reader)?;
                info!(path = %path.display(), rows = holidays.len(), "loaded static holiday table");
                Ok(Arc::new(StaticHolidayTable::new(holidays)?))
            }
            None => Ok(StaticHolidayTable::builtin())
        }
    }

    fn calculator(&self) -> Result<Arc<HolidayCalculator>, LoaderError> {
        let tz = self.time_zone()?;
        if tz.local_minus_utc() == JST_OFFSET_SECONDS
            && self.rule_generations.is_none()
            && self.special_holidays.is_none() {
            return Ok(HolidayCalculator::builtin());
        }

        let rules = match &self.rule_generations {
            Some(json_vec) => rule_set_from_json(json_vec.clone())?,
            None => builtin_rule_set().clone()
        };
        let special_holidays = match &self.special_holidays {
            Some(json_vec) => special_holidays_from_json(json_vec.clone())?,
            None => builtin_special_holidays().clone()
        };
        Ok(Arc::new(HolidayCalculator::new(rules, special_holidays, tz)))
    }

    /// Validates every source and assembles the lookup engine.
    pub fn build_calendar(&self) -> Result<JapanHolidayCalendar, LoaderError> {
        let table = self.static_table()?;
        let calculator = self.calculator()?;
        info!(
            table = %table.stats(),
            generations = calculator.rules().generations().len(),
            special_holidays = calculator.special_holidays().len(),
            coverage = ?self.coverage,
            "holiday calendar ready"
        );
        Ok(JapanHolidayCalendar::new(table, calculator, self.coverage))
    }
}
