pub mod astronomy {
    pub mod sunlongitude;
    pub mod equinox;
}

pub mod configuration;

pub mod data {
    pub mod syukujitsu;
    pub mod rules;
}

pub mod holiday;

pub mod loader {
    pub mod loadererror;
    pub mod ruleloader;
    pub mod syukujitsucsv;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod equinoxholiday;
        pub mod rulegeneration;
    }

    pub mod calendar {
        pub mod calendarerror;
        pub mod holidaycalendar;
        pub mod statictable;
        pub mod specialholidays;
        pub mod holidaycalculator;
        pub mod japancalendar;
    }
}
