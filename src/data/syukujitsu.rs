// Code generated from syukujitsu.csv; DO NOT EDIT.
//
// 内閣府「国民の祝日について」
// https://www8.cao.go.jp/chosei/shukujitsu/gaiyou.html

/// First year covered by [`SYUKUJITSU`].
pub const SYUKUJITSU_START_YEAR: i32 = 1955;

/// Last year covered by [`SYUKUJITSU`].
pub const SYUKUJITSU_END_YEAR: i32 = 2027;

/// `(year, month, day, name)` in ascending date order.
#[rustfmt::skip]
pub static SYUKUJITSU: &[(i32, u32, u32, &str)] = &[
    (1955, 1, 1, "元日"),
    (1955, 1, 15, "成人の日"),
    (1955, 3, 21, "春分の日"),
    (1955, 4, 29, "天皇誕生日"),
    (1955, 5, 3, "憲法記念日"),
    (1955, 5, 5, "こどもの日"),
    (1955, 9, 24, "秋分の日"),
    (1955, 11, 3, "文化の日"),
    (1955, 11, 23, "勤労感謝の日"),
    (1956, 1, 1, "元日"),
    (1956, 1, 15, "成人の日"),
    (1956, 3, 21, "春分の日"),
    (1956, 4, 29, "天皇誕生日"),
    (1956, 5, 3, "憲法記念日"),
    (1956, 5, 5, "こどもの日"),
    (1956, 9, 23, "秋分の日"),
    (1956, 11, 3, "文化の日"),
    (1956, 11, 23, "勤労感謝の日"),
    (1957, 1, 1, "元日"),
    (1957, 1, 15, "成人の日"),
    (1957, 3, 21, "春分の日"),
    (1957, 4, 29, "天皇誕生日"),
    (1957, 5, 3, "憲法記念日"),
    (1957, 5, 5, "こどもの日"),
    (1957, 9, 23, "秋分の日"),
    (1957, 11, 3, "文化の日"),
    (1957, 11, 23, "勤労感謝の日"),
    (1958, 1, 1, "元日"),
    (1958, 1, 15, "成人の日"),
    (1958, 3, 21, "春分の日"),
    (1958, 4, 29, "天皇誕生日"),
    (1958, 5, 3, "憲法記念日"),
    (1958, 5, 5, "こどもの日"),
    (1958, 9, 23, "秋分の日"),
    (1958, 11, 3, "文化の日"),
    (1958, 11, 23, "勤労感謝の日"),
    (1959, 1, 1, "元日"),
    (1959, 1, 15, "成人の日"),
    (1959, 3, 21, "春分の日"),
    (1959, 4, 10, "結婚の儀"),
    (1959, 4, 29, "天皇誕生日"),
    (1959, 5, 3, "憲法記念日"),
    (1959, 5, 5, "こどもの日"),
    (1959, 9, 24, "秋分の日"),
    (1959, 11, 3, "文化の日"),
    (1959, 11, 23, "勤労感謝の日"),
    (1960, 1, 1, "元日"),
    (1960, 1, 15, "成人の日"),
    (1960, 3, 20, "春分の日"),
    (1960, 4, 29, "天皇誕生日"),
    (1960, 5, 3, "憲法記念日"),
    (1960, 5, 5, "こどもの日"),
    (1960, 9, 23, "秋分の日"),
    (1960, 11, 3, "文化の日"),
    (1960, 11, 23, "勤労感謝の日"),
    (1961, 1, 1, "元日"),
    (1961, 1, 15, "成人の日"),
    (1961, 3, 21, "春分の日"),
    (1961, 4, 29, "天皇誕生日"),
    (1961, 5, 3, "憲法記念日"),
    (1961, 5, 5, "こどもの日"),
    (1961, 9, 23, "秋分の日"),
    (1961, 11, 3, "文化の日"),
    (1961, 11, 23, "勤労感謝の日"),
    (1962, 1, 1, "元日"),
    (1962, 1, 15, "成人の日"),
    (1962, 3, 21, "春分の日"),
    (1962, 4, 29, "天皇誕生日"),
    (1962, 5, 3, "憲法記念日"),
    (1962, 5, 5, "こどもの日"),
    (1962, 9, 23, "秋分の日"),
    (1962, 11, 3, "文化の日"),
    (1962, 11, 23, "勤労感謝の日"),
    (1963, 1, 1, "元日"),
    (1963, 1, 15, "成人の日"),
    (1963, 3, 21, "春分の日"),
    (1963, 4, 29, "天皇誕生日"),
    (1963, 5, 3, "憲法記念日"),
    (1963, 5, 5, "こどもの日"),
    (1963, 9, 24, "秋分の日"),
    (1963, 11, 3, "文化の日"),
    (1963, 11, 23, "勤労感謝の日"),
    (1964, 1, 1, "元日"),
    (1964, 1, 15, "成人の日"),
    (1964, 3, 20, "春分の日"),
    (1964, 4, 29, "天皇誕生日"),
    (1964, 5, 3, "憲法記念日"),
    (1964, 5, 5, "こどもの日"),
    (1964, 9, 23, "秋分の日"),
    (1964, 11, 3, "文化の日"),
    (1964, 11, 23, "勤労感謝の日"),
    (1965, 1, 1, "元日"),
    (1965, 1, 15, "成人の日"),
    (1965, 3, 21, "春分の日"),
    (1965, 4, 29, "天皇誕生日"),
    (1965, 5, 3, "憲法記念日"),
    (1965, 5, 5, "こどもの日"),
    (1965, 9, 23, "秋分の日"),
    (1965, 11, 3, "文化の日"),
    (1965, 11, 23, "勤労感謝の日"),
    (1966, 1, 1, "元日"),
    (1966, 1, 15, "成人の日"),
    (1966, 3, 21, "春分の日"),
    (1966, 4, 29, "天皇誕生日"),
    (1966, 5, 3, "憲法記念日"),
    (1966, 5, 5, "こどもの日"),
    (1966, 9, 15, "敬老の日"),
    (1966, 9, 23, "秋分の日"),
    (1966, 10, 10, "体育の日"),
    (1966, 11, 3, "文化の日"),
    (1966, 11, 23, "勤労感謝の日"),
    (1967, 1, 1, "元日"),
    (1967, 1, 15, "成人の日"),
    (1967, 2, 11, "建国記念の日"),
    (1967, 3, 21, "春分の日"),
    (1967, 4, 29, "天皇誕生日"),
    (1967, 5, 3, "憲法記念日"),
    (1967, 5, 5, "こどもの日"),
    (1967, 9, 15, "敬老の日"),
    (1967, 9, 24, "秋分の日"),
    (1967, 10, 10, "体育の日"),
    (1967, 11, 3, "文化の日"),
    (1967, 11, 23, "勤労感謝の日"),
    (1968, 1, 1, "元日"),
    (1968, 1, 15, "成人の日"),
    (1968, 2, 11, "建国記念の日"),
    (1968, 3, 20, "春分の日"),
    (1968, 4, 29, "天皇誕生日"),
    (1968, 5, 3, "憲法記念日"),
    (1968, 5, 5, "こどもの日"),
    (1968, 9, 15, "敬老の日"),
    (1968, 9, 23, "秋分の日"),
    (1968, 10, 10, "体育の日"),
    (1968, 11, 3, "文化の日"),
    (1968, 11, 23, "勤労感謝の日"),
    (1969, 1, 1, "元日"),
    (1969, 1, 15, "成人の日"),
    (1969, 2, 11, "建国記念の日"),
    (1969, 3, 21, "春分の日"),
    (1969, 4, 29, "天皇誕生日"),
    (1969, 5, 3, "憲法記念日"),
    (1969, 5, 5, "こどもの日"),
    (1969, 9, 15, "敬老の日"),
    (1969, 9, 23, "秋分の日"),
    (1969, 10, 10, "体育の日"),
    (1969, 11, 3, "文化の日"),
    (1969, 11, 23, "勤労感謝の日"),
    (1970, 1, 1, "元日"),
    (1970, 1, 15, "成人の日"),
    (1970, 2, 11, "建国記念の日"),
    (1970, 3, 21, "春分の日"),
    (1970, 4, 29, "天皇誕生日"),
    (1970, 5, 3, "憲法記念日"),
    (1970, 5, 5, "こどもの日"),
    (1970, 9, 15, "敬老の日"),
    (1970, 9, 23, "秋分の日"),
    (1970, 10, 10, "体育の日"),
    (1970, 11, 3, "文化の日"),
    (1970, 11, 23, "勤労感謝の日"),
    (1971, 1, 1, "元日"),
    (1971, 1, 15, "成人の日"),
    (1971, 2, 11, "建国記念の日"),
    (1971, 3, 21, "春分の日"),
    (1971, 4, 29, "天皇誕生日"),
    (1971, 5, 3, "憲法記念日"),
    (1971, 5, 5, "こどもの日"),
    (1971, 9, 15, "敬老の日"),
    (1971, 9, 24, "秋分の日"),
    (1971, 10, 10, "体育の日"),
    (1971, 11, 3, "文化の日"),
    (1971, 11, 23, "勤労感謝の日"),
    (1972, 1, 1, "元日"),
    (1972, 1, 15, "成人の日"),
    (1972, 2, 11, "建国記念の日"),
    (1972, 3, 20, "春分の日"),
    (1972, 4, 29, "天皇誕生日"),
    (1972, 5, 3, "憲法記念日"),
    (1972, 5, 5, "こどもの日"),
    (1972, 9, 15, "敬老の日"),
    (1972, 9, 23, "秋分の日"),
    (1972, 10, 10, "体育の日"),
    (1972, 11, 3, "文化の日"),
    (1972, 11, 23, "勤労感謝の日"),
    (1973, 1, 1, "元日"),
    (1973, 1, 15, "成人の日"),
    (1973, 2, 11, "建国記念の日"),
    (1973, 3, 21, "春分の日"),
    (1973, 4, 29, "天皇誕生日"),
    (1973, 4, 30, "休日"),
    (1973, 5, 3, "憲法記念日"),
    (1973, 5, 5, "こどもの日"),
    (1973, 9, 15, "敬老の日"),
    (1973, 9, 23, "秋分の日"),
    (1973, 9, 24, "休日"),
    (1973, 10, 10, "体育の日"),
    (1973, 11, 3, "文化の日"),
    (1973, 11, 23, "勤労感謝の日"),
    (1974, 1, 1, "元日"),
    (1974, 1, 15, "成人の日"),
    (1974, 2, 11, "建国記念の日"),
    (1974, 3, 21, "春分の日"),
    (1974, 4, 29, "天皇誕生日"),
    (1974, 5, 3, "憲法記念日"),
    (1974, 5, 5, "こどもの日"),
    (1974, 5, 6, "休日"),
    (1974, 9, 15, "敬老の日"),
    (1974, 9, 16, "休日"),
    (1974, 9, 23, "秋分の日"),
    (1974, 10, 10, "体育の日"),
    (1974, 11, 3, "文化の日"),
    (1974, 11, 4, "休日"),
    (1974, 11, 23, "勤労感謝の日"),
    (1975, 1, 1, "元日"),
    (1975, 1, 15, "成人の日"),
    (1975, 2, 11, "建国記念の日"),
    (1975, 3, 21, "春分の日"),
    (1975, 4, 29, "天皇誕生日"),
    (1975, 5, 3, "憲法記念日"),
    (1975, 5, 5, "こどもの日"),
    (1975, 9, 15, "敬老の日"),
    (1975, 9, 24, "秋分の日"),
    (1975, 10, 10, "体育の日"),
    (1975, 11, 3, "文化の日"),
    (1975, 11, 23, "勤労感謝の日"),
    (1975, 11, 24, "休日"),
    (1976, 1, 1, "元日"),
    (1976, 1, 15, "成人の日"),
    (1976, 2, 11, "建国記念の日"),
    (1976, 3, 20, "春分の日"),
    (1976, 4, 29, "天皇誕生日"),
    (1976, 5, 3, "憲法記念日"),
    (1976, 5, 5, "こどもの日"),
    (1976, 9, 15, "敬老の日"),
    (1976, 9, 23, "秋分の日"),
    (1976, 10, 10, "体育の日"),
    (1976, 10, 11, "休日"),
    (1976, 11, 3, "文化の日"),
    (1976, 11, 23, "勤労感謝の日"),
    (1977, 1, 1, "元日"),
    (1977, 1, 15, "成人の日"),
    (1977, 2, 11, "建国記念の日"),
    (1977, 3, 21, "春分の日"),
    (1977, 4, 29, "天皇誕生日"),
    (1977, 5, 3, "憲法記念日"),
    (1977, 5, 5, "こどもの日"),
    (1977, 9, 15, "敬老の日"),
    (1977, 9, 23, "秋分の日"),
    (1977, 10, 10, "体育の日"),
    (1977, 11, 3, "文化の日"),
    (1977, 11, 23, "勤労感謝の日"),
    (1978, 1, 1, "元日"),
    (1978, 1, 2, "休日"),
    (1978, 1, 15, "成人の日"),
    (1978, 1, 16, "休日"),
    (1978, 2, 11, "建国記念の日"),
    (1978, 3, 21, "春分の日"),
    (1978, 4, 29, "天皇誕生日"),
    (1978, 5, 3, "憲法記念日"),
    (1978, 5, 5, "こどもの日"),
    (1978, 9, 15, "敬老の日"),
    (1978, 9, 23, "秋分の日"),
    (1978, 10, 10, "体育の日"),
    (1978, 11, 3, "文化の日"),
    (1978, 11, 23, "勤労感謝の日"),
    (1979, 1, 1, "元日"),
    (1979, 1, 15, "成人の日"),
    (1979, 2, 11, "建国記念の日"),
    (1979, 2, 12, "休日"),
    (1979, 3, 21, "春分の日"),
    (1979, 4, 29, "天皇誕生日"),
    (1979, 4, 30, "休日"),
    (1979, 5, 3, "憲法記念日"),
    (1979, 5, 5, "こどもの日"),
    (1979, 9, 15, "敬老の日"),
    (1979, 9, 24, "秋分の日"),
    (1979, 10, 10, "体育の日"),
    (1979, 11, 3, "文化の日"),
    (1979, 11, 23, "勤労感謝の日"),
    (1980, 1, 1, "元日"),
    (1980, 1, 15, "成人の日"),
    (1980, 2, 11, "建国記念の日"),
    (1980, 3, 20, "春分の日"),
    (1980, 4, 29, "天皇誕生日"),
    (1980, 5, 3, "憲法記念日"),
    (1980, 5, 5, "こどもの日"),
    (1980, 9, 15, "敬老の日"),
    (1980, 9, 23, "秋分の日"),
    (1980, 10, 10, "体育の日"),
    (1980, 11, 3, "文化の日"),
    (1980, 11, 23, "勤労感謝の日"),
    (1980, 11, 24, "休日"),
    (1981, 1, 1, "元日"),
    (1981, 1, 15, "成人の日"),
    (1981, 2, 11, "建国記念の日"),
    (1981, 3, 21, "春分の日"),
    (1981, 4, 29, "天皇誕生日"),
    (1981, 5, 3, "憲法記念日"),
    (1981, 5, 4, "休日"),
    (1981, 5, 5, "こどもの日"),
    (1981, 9, 15, "敬老の日"),
    (1981, 9, 23, "秋分の日"),
    (1981, 10, 10, "体育の日"),
    (1981, 11, 3, "文化の日"),
    (1981, 11, 23, "勤労感謝の日"),
    (1982, 1, 1, "元日"),
    (1982, 1, 15, "成人の日"),
    (1982, 2, 11, "建国記念の日"),
    (1982, 3, 21, "春分の日"),
    (1982, 3, 22, "休日"),
    (1982, 4, 29, "天皇誕生日"),
    (1982, 5, 3, "憲法記念日"),
    (1982, 5, 5, "こどもの日"),
    (1982, 9, 15, "敬老の日"),
    (1982, 9, 23, "秋分の日"),
    (1982, 10, 10, "体育の日"),
    (1982, 10, 11, "休日"),
    (1982, 11, 3, "文化の日"),
    (1982, 11, 23, "勤労感謝の日"),
    (1983, 1, 1, "元日"),
    (1983, 1, 15, "成人の日"),
    (1983, 2, 11, "建国記念の日"),
    (1983, 3, 21, "春分の日"),
    (1983, 4, 29, "天皇誕生日"),
    (1983, 5, 3, "憲法記念日"),
    (1983, 5, 5, "こどもの日"),
    (1983, 9, 15, "敬老の日"),
    (1983, 9, 23, "秋分の日"),
    (1983, 10, 10, "体育の日"),
    (1983, 11, 3, "文化の日"),
    (1983, 11, 23, "勤労感謝の日"),
    (1984, 1, 1, "元日"),
    (1984, 1, 2, "休日"),
    (1984, 1, 15, "成人の日"),
    (1984, 1, 16, "休日"),
    (1984, 2, 11, "建国記念の日"),
    (1984, 3, 20, "春分の日"),
    (1984, 4, 29, "天皇誕生日"),
    (1984, 4, 30, "休日"),
    (1984, 5, 3, "憲法記念日"),
    (1984, 5, 5, "こどもの日"),
    (1984, 9, 15, "敬老の日"),
    (1984, 9, 23, "秋分の日"),
    (1984, 9, 24, "休日"),
    (1984, 10, 10, "体育の日"),
    (1984, 11, 3, "文化の日"),
    (1984, 11, 23, "勤労感謝の日"),
    (1985, 1, 1, "元日"),
    (1985, 1, 15, "成人の日"),
    (1985, 2, 11, "建国記念の日"),
    (1985, 3, 21, "春分の日"),
    (1985, 4, 29, "天皇誕生日"),
    (1985, 5, 3, "憲法記念日"),
    (1985, 5, 5, "こどもの日"),
    (1985, 5, 6, "休日"),
    (1985, 9, 15, "敬老の日"),
    (1985, 9, 16, "休日"),
    (1985, 9, 23, "秋分の日"),
    (1985, 10, 10, "体育の日"),
    (1985, 11, 3, "文化の日"),
    (1985, 11, 4, "休日"),
    (1985, 11, 23, "勤労感謝の日"),
    (1986, 1, 1, "元日"),
    (1986, 1, 15, "成人の日"),
    (1986, 2, 11, "建国記念の日"),
    (1986, 3, 21, "春分の日"),
    (1986, 4, 29, "天皇誕生日"),
    (1986, 5, 3, "憲法記念日"),
    (1986, 5, 5, "こどもの日"),
    (1986, 9, 15, "敬老の日"),
    (1986, 9, 23, "秋分の日"),
    (1986, 10, 10, "体育の日"),
    (1986, 11, 3, "文化の日"),
    (1986, 11, 23, "勤労感謝の日"),
    (1986, 11, 24, "休日"),
    (1987, 1, 1, "元日"),
    (1987, 1, 15, "成人の日"),
    (1987, 2, 11, "建国記念の日"),
    (1987, 3, 21, "春分の日"),
    (1987, 4, 29, "天皇誕生日"),
    (1987, 5, 3, "憲法記念日"),
    (1987, 5, 4, "休日"),
    (1987, 5, 5, "こどもの日"),
    (1987, 9, 15, "敬老の日"),
    (1987, 9, 23, "秋分の日"),
    (1987, 10, 10, "体育の日"),
    (1987, 11, 3, "文化の日"),
    (1987, 11, 23, "勤労感謝の日"),
    (1988, 1, 1, "元日"),
    (1988, 1, 15, "成人の日"),
    (1988, 2, 11, "建国記念の日"),
    (1988, 3, 20, "春分の日"),
    (1988, 3, 21, "休日"),
    (1988, 4, 29, "天皇誕生日"),
    (1988, 5, 3, "憲法記念日"),
    (1988, 5, 4, "休日"),
    (1988, 5, 5, "こどもの日"),
    (1988, 9, 15, "敬老の日"),
    (1988, 9, 23, "秋分の日"),
    (1988, 10, 10, "体育の日"),
    (1988, 11, 3, "文化の日"),
    (1988, 11, 23, "勤労感謝の日"),
    (1989, 1, 1, "元日"),
    (1989, 1, 2, "休日"),
    (1989, 1, 15, "成人の日"),
    (1989, 1, 16, "休日"),
    (1989, 2, 11, "建国記念の日"),
    (1989, 2, 24, "大喪の礼"),
    (1989, 3, 21, "春分の日"),
    (1989, 4, 29, "みどりの日"),
    (1989, 5, 3, "憲法記念日"),
    (1989, 5, 4, "休日"),
    (1989, 5, 5, "こどもの日"),
    (1989, 9, 15, "敬老の日"),
    (1989, 9, 23, "秋分の日"),
    (1989, 10, 10, "体育の日"),
    (1989, 11, 3, "文化の日"),
    (1989, 11, 23, "勤労感謝の日"),
    (1989, 12, 23, "天皇誕生日"),
    (1990, 1, 1, "元日"),
    (1990, 1, 15, "成人の日"),
    (1990, 2, 11, "建国記念の日"),
    (1990, 2, 12, "休日"),
    (1990, 3, 21, "春分の日"),
    (1990, 4, 29, "みどりの日"),
    (1990, 4, 30, "休日"),
    (1990, 5, 3, "憲法記念日"),
    (1990, 5, 4, "休日"),
    (1990, 5, 5, "こどもの日"),
    (1990, 9, 15, "敬老の日"),
    (1990, 9, 23, "秋分の日"),
    (1990, 9, 24, "休日"),
    (1990, 10, 10, "体育の日"),
    (1990, 11, 3, "文化の日"),
    (1990, 11, 12, "即位礼正殿の儀"),
    (1990, 11, 23, "勤労感謝の日"),
    (1990, 12, 23, "天皇誕生日"),
    (1990, 12, 24, "休日"),
    (1991, 1, 1, "元日"),
    (1991, 1, 15, "成人の日"),
    (1991, 2, 11, "建国記念の日"),
    (1991, 3, 21, "春分の日"),
    (1991, 4, 29, "みどりの日"),
    (1991, 5, 3, "憲法記念日"),
    (1991, 5, 4, "休日"),
    (1991, 5, 5, "こどもの日"),
    (1991, 5, 6, "休日"),
    (1991, 9, 15, "敬老の日"),
    (1991, 9, 16, "休日"),
    (1991, 9, 23, "秋分の日"),
    (1991, 10, 10, "体育の日"),
    (1991, 11, 3, "文化の日"),
    (1991, 11, 4, "休日"),
    (1991, 11, 23, "勤労感謝の日"),
    (1991, 12, 23, "天皇誕生日"),
    (1992, 1, 1, "元日"),
    (1992, 1, 15, "成人の日"),
    (1992, 2, 11, "建国記念の日"),
    (1992, 3, 20, "春分の日"),
    (1992, 4, 29, "みどりの日"),
    (1992, 5, 3, "憲法記念日"),
    (1992, 5, 4, "休日"),
    (1992, 5, 5, "こどもの日"),
    (1992, 9, 15, "敬老の日"),
    (1992, 9, 23, "秋分の日"),
    (1992, 10, 10, "体育の日"),
    (1992, 11, 3, "文化の日"),
    (1992, 11, 23, "勤労感謝の日"),
    (1992, 12, 23, "天皇誕生日"),
    (1993, 1, 1, "元日"),
    (1993, 1, 15, "成人の日"),
    (1993, 2, 11, "建国記念の日"),
    (1993, 3, 20, "春分の日"),
    (1993, 4, 29, "みどりの日"),
    (1993, 5, 3, "憲法記念日"),
    (1993, 5, 4, "休日"),
    (1993, 5, 5, "こどもの日"),
    (1993, 6, 9, "結婚の儀"),
    (1993, 9, 15, "敬老の日"),
    (1993, 9, 23, "秋分の日"),
    (1993, 10, 10, "体育の日"),
    (1993, 10, 11, "休日"),
    (1993, 11, 3, "文化の日"),
    (1993, 11, 23, "勤労感謝の日"),
    (1993, 12, 23, "天皇誕生日"),
    (1994, 1, 1, "元日"),
    (1994, 1, 15, "成人の日"),
    (1994, 2, 11, "建国記念の日"),
    (1994, 3, 21, "春分の日"),
    (1994, 4, 29, "みどりの日"),
    (1994, 5, 3, "憲法記念日"),
    (1994, 5, 4, "休日"),
    (1994, 5, 5, "こどもの日"),
    (1994, 9, 15, "敬老の日"),
    (1994, 9, 23, "秋分の日"),
    (1994, 10, 10, "体育の日"),
    (1994, 11, 3, "文化の日"),
    (1994, 11, 23, "勤労感謝の日"),
    (1994, 12, 23, "天皇誕生日"),
    (1995, 1, 1, "元日"),
    (1995, 1, 2, "休日"),
    (1995, 1, 15, "成人の日"),
    (1995, 1, 16, "休日"),
    (1995, 2, 11, "建国記念の日"),
    (1995, 3, 21, "春分の日"),
    (1995, 4, 29, "みどりの日"),
    (1995, 5, 3, "憲法記念日"),
    (1995, 5, 4, "休日"),
    (1995, 5, 5, "こどもの日"),
    (1995, 9, 15, "敬老の日"),
    (1995, 9, 23, "秋分の日"),
    (1995, 10, 10, "体育の日"),
    (1995, 11, 3, "文化の日"),
    (1995, 11, 23, "勤労感謝の日"),
    (1995, 12, 23, "天皇誕生日"),
    (1996, 1, 1, "元日"),
    (1996, 1, 15, "成人の日"),
    (1996, 2, 11, "建国記念の日"),
    (1996, 2, 12, "休日"),
    (1996, 3, 20, "春分の日"),
    (1996, 4, 29, "みどりの日"),
    (1996, 5, 3, "憲法記念日"),
    (1996, 5, 4, "休日"),
    (1996, 5, 5, "こどもの日"),
    (1996, 5, 6, "休日"),
    (1996, 7, 20, "海の日"),
    (1996, 9, 15, "敬老の日"),
    (1996, 9, 16, "休日"),
    (1996, 9, 23, "秋分の日"),
    (1996, 10, 10, "体育の日"),
    (1996, 11, 3, "文化の日"),
    (1996, 11, 4, "休日"),
    (1996, 11, 23, "勤労感謝の日"),
    (1996, 12, 23, "天皇誕生日"),
    (1997, 1, 1, "元日"),
    (1997, 1, 15, "成人の日"),
    (1997, 2, 11, "建国記念の日"),
    (1997, 3, 20, "春分の日"),
    (1997, 4, 29, "みどりの日"),
    (1997, 5, 3, "憲法記念日"),
    (1997, 5, 5, "こどもの日"),
    (1997, 7, 20, "海の日"),
    (1997, 7, 21, "休日"),
    (1997, 9, 15, "敬老の日"),
    (1997, 9, 23, "秋分の日"),
    (1997, 10, 10, "体育の日"),
    (1997, 11, 3, "文化の日"),
    (1997, 11, 23, "勤労感謝の日"),
    (1997, 11, 24, "休日"),
    (1997, 12, 23, "天皇誕生日"),
    (1998, 1, 1, "元日"),
    (1998, 1, 15, "成人の日"),
    (1998, 2, 11, "建国記念の日"),
    (1998, 3, 21, "春分の日"),
    (1998, 4, 29, "みどりの日"),
    (1998, 5, 3, "憲法記念日"),
    (1998, 5, 4, "休日"),
    (1998, 5, 5, "こどもの日"),
    (1998, 7, 20, "海の日"),
    (1998, 9, 15, "敬老の日"),
    (1998, 9, 23, "秋分の日"),
    (1998, 10, 10, "体育の日"),
    (1998, 11, 3, "文化の日"),
    (1998, 11, 23, "勤労感謝の日"),
    (1998, 12, 23, "天皇誕生日"),
    (1999, 1, 1, "元日"),
    (1999, 1, 15, "成人の日"),
    (1999, 2, 11, "建国記念の日"),
    (1999, 3, 21, "春分の日"),
    (1999, 3, 22, "休日"),
    (1999, 4, 29, "みどりの日"),
    (1999, 5, 3, "憲法記念日"),
    (1999, 5, 4, "休日"),
    (1999, 5, 5, "こどもの日"),
    (1999, 7, 20, "海の日"),
    (1999, 9, 15, "敬老の日"),
    (1999, 9, 23, "秋分の日"),
    (1999, 10, 10, "体育の日"),
    (1999, 10, 11, "休日"),
    (1999, 11, 3, "文化の日"),
    (1999, 11, 23, "勤労感謝の日"),
    (1999, 12, 23, "天皇誕生日"),
    (2000, 1, 1, "元日"),
    (2000, 1, 10, "成人の日"),
    (2000, 2, 11, "建国記念の日"),
    (2000, 3, 20, "春分の日"),
    (2000, 4, 29, "みどりの日"),
    (2000, 5, 3, "憲法記念日"),
    (2000, 5, 4, "休日"),
    (2000, 5, 5, "こどもの日"),
    (2000, 7, 20, "海の日"),
    (2000, 9, 15, "敬老の日"),
    (2000, 9, 23, "秋分の日"),
    (2000, 10, 9, "体育の日"),
    (2000, 11, 3, "文化の日"),
    (2000, 11, 23, "勤労感謝の日"),
    (2000, 12, 23, "天皇誕生日"),
    (2001, 1, 1, "元日"),
    (2001, 1, 8, "成人の日"),
    (2001, 2, 11, "建国記念の日"),
    (2001, 2, 12, "休日"),
    (2001, 3, 20, "春分の日"),
    (2001, 4, 29, "みどりの日"),
    (2001, 4, 30, "休日"),
    (2001, 5, 3, "憲法記念日"),
    (2001, 5, 4, "休日"),
    (2001, 5, 5, "こどもの日"),
    (2001, 7, 20, "海の日"),
    (2001, 9, 15, "敬老の日"),
    (2001, 9, 23, "秋分の日"),
    (2001, 9, 24, "休日"),
    (2001, 10, 8, "体育の日"),
    (2001, 11, 3, "文化の日"),
    (2001, 11, 23, "勤労感謝の日"),
    (2001, 12, 23, "天皇誕生日"),
    (2001, 12, 24, "休日"),
    (2002, 1, 1, "元日"),
    (2002, 1, 14, "成人の日"),
    (2002, 2, 11, "建国記念の日"),
    (2002, 3, 21, "春分の日"),
    (2002, 4, 29, "みどりの日"),
    (2002, 5, 3, "憲法記念日"),
    (2002, 5, 4, "休日"),
    (2002, 5, 5, "こどもの日"),
    (2002, 5, 6, "休日"),
    (2002, 7, 20, "海の日"),
    (2002, 9, 15, "敬老の日"),
    (2002, 9, 16, "休日"),
    (2002, 9, 23, "秋分の日"),
    (2002, 10, 14, "体育の日"),
    (2002, 11, 3, "文化の日"),
    (2002, 11, 4, "休日"),
    (2002, 11, 23, "勤労感謝の日"),
    (2002, 12, 23, "天皇誕生日"),
    (2003, 1, 1, "元日"),
    (2003, 1, 13, "成人の日"),
    (2003, 2, 11, "建国記念の日"),
    (2003, 3, 21, "春分の日"),
    (2003, 4, 29, "みどりの日"),
    (2003, 5, 3, "憲法記念日"),
    (2003, 5, 5, "こどもの日"),
    (2003, 7, 21, "海の日"),
    (2003, 9, 15, "敬老の日"),
    (2003, 9, 23, "秋分の日"),
    (2003, 10, 13, "体育の日"),
    (2003, 11, 3, "文化の日"),
    (2003, 11, 23, "勤労感謝の日"),
    (2003, 11, 24, "休日"),
    (2003, 12, 23, "天皇誕生日"),
    (2004, 1, 1, "元日"),
    (2004, 1, 12, "成人の日"),
    (2004, 2, 11, "建国記念の日"),
    (2004, 3, 20, "春分の日"),
    (2004, 4, 29, "みどりの日"),
    (2004, 5, 3, "憲法記念日"),
    (2004, 5, 4, "休日"),
    (2004, 5, 5, "こどもの日"),
    (2004, 7, 19, "海の日"),
    (2004, 9, 20, "敬老の日"),
    (2004, 9, 23, "秋分の日"),
    (2004, 10, 11, "体育の日"),
    (2004, 11, 3, "文化の日"),
    (2004, 11, 23, "勤労感謝の日"),
    (2004, 12, 23, "天皇誕生日"),
    (2005, 1, 1, "元日"),
    (2005, 1, 10, "成人の日"),
    (2005, 2, 11, "建国記念の日"),
    (2005, 3, 20, "春分の日"),
    (2005, 3, 21, "休日"),
    (2005, 4, 29, "みどりの日"),
    (2005, 5, 3, "憲法記念日"),
    (2005, 5, 4, "休日"),
    (2005, 5, 5, "こどもの日"),
    (2005, 7, 18, "海の日"),
    (2005, 9, 19, "敬老の日"),
    (2005, 9, 23, "秋分の日"),
    (2005, 10, 10, "体育の日"),
    (2005, 11, 3, "文化の日"),
    (2005, 11, 23, "勤労感謝の日"),
    (2005, 12, 23, "天皇誕生日"),
    (2006, 1, 1, "元日"),
    (2006, 1, 2, "休日"),
    (2006, 1, 9, "成人の日"),
    (2006, 2, 11, "建国記念の日"),
    (2006, 3, 21, "春分の日"),
    (2006, 4, 29, "みどりの日"),
    (2006, 5, 3, "憲法記念日"),
    (2006, 5, 4, "休日"),
    (2006, 5, 5, "こどもの日"),
    (2006, 7, 17, "海の日"),
    (2006, 9, 18, "敬老の日"),
    (2006, 9, 23, "秋分の日"),
    (2006, 10, 9, "体育の日"),
    (2006, 11, 3, "文化の日"),
    (2006, 11, 23, "勤労感謝の日"),
    (2006, 12, 23, "天皇誕生日"),
    (2007, 1, 1, "元日"),
    (2007, 1, 8, "成人の日"),
    (2007, 2, 11, "建国記念の日"),
    (2007, 2, 12, "休日"),
    (2007, 3, 21, "春分の日"),
    (2007, 4, 29, "昭和の日"),
    (2007, 4, 30, "休日"),
    (2007, 5, 3, "憲法記念日"),
    (2007, 5, 4, "みどりの日"),
    (2007, 5, 5, "こどもの日"),
    (2007, 7, 16, "海の日"),
    (2007, 9, 17, "敬老の日"),
    (2007, 9, 23, "秋分の日"),
    (2007, 9, 24, "休日"),
    (2007, 10, 8, "体育の日"),
    (2007, 11, 3, "文化の日"),
    (2007, 11, 23, "勤労感謝の日"),
    (2007, 12, 23, "天皇誕生日"),
    (2007, 12, 24, "休日"),
    (2008, 1, 1, "元日"),
    (2008, 1, 14, "成人の日"),
    (2008, 2, 11, "建国記念の日"),
    (2008, 3, 20, "春分の日"),
    (2008, 4, 29, "昭和の日"),
    (2008, 5, 3, "憲法記念日"),
    (2008, 5, 4, "みどりの日"),
    (2008, 5, 5, "こどもの日"),
    (2008, 5, 6, "休日"),
    (2008, 7, 21, "海の日"),
    (2008, 9, 15, "敬老の日"),
    (2008, 9, 23, "秋分の日"),
    (2008, 10, 13, "体育の日"),
    (2008, 11, 3, "文化の日"),
    (2008, 11, 23, "勤労感謝の日"),
    (2008, 11, 24, "休日"),
    (2008, 12, 23, "天皇誕生日"),
    (2009, 1, 1, "元日"),
    (2009, 1, 12, "成人の日"),
    (2009, 2, 11, "建国記念の日"),
    (2009, 3, 20, "春分の日"),
    (2009, 4, 29, "昭和の日"),
    (2009, 5, 3, "憲法記念日"),
    (2009, 5, 4, "みどりの日"),
    (2009, 5, 5, "こどもの日"),
    (2009, 5, 6, "休日"),
    (2009, 7, 20, "海の日"),
    (2009, 9, 21, "敬老の日"),
    (2009, 9, 22, "休日"),
    (2009, 9, 23, "秋分の日"),
    (2009, 10, 12, "体育の日"),
    (2009, 11, 3, "文化の日"),
    (2009, 11, 23, "勤労感謝の日"),
    (2009, 12, 23, "天皇誕生日"),
    (2010, 1, 1, "元日"),
    (2010, 1, 11, "成人の日"),
    (2010, 2, 11, "建国記念の日"),
    (2010, 3, 21, "春分の日"),
    (2010, 3, 22, "休日"),
    (2010, 4, 29, "昭和の日"),
    (2010, 5, 3, "憲法記念日"),
    (2010, 5, 4, "みどりの日"),
    (2010, 5, 5, "こどもの日"),
    (2010, 7, 19, "海の日"),
    (2010, 9, 20, "敬老の日"),
    (2010, 9, 23, "秋分の日"),
    (2010, 10, 11, "体育の日"),
    (2010, 11, 3, "文化の日"),
    (2010, 11, 23, "勤労感謝の日"),
    (2010, 12, 23, "天皇誕生日"),
    (2011, 1, 1, "元日"),
    (2011, 1, 10, "成人の日"),
    (2011, 2, 11, "建国記念の日"),
    (2011, 3, 21, "春分の日"),
    (2011, 4, 29, "昭和の日"),
    (2011, 5, 3, "憲法記念日"),
    (2011, 5, 4, "みどりの日"),
    (2011, 5, 5, "こどもの日"),
    (2011, 7, 18, "海の日"),
    (2011, 9, 19, "敬老の日"),
    (2011, 9, 23, "秋分の日"),
    (2011, 10, 10, "体育の日"),
    (2011, 11, 3, "文化の日"),
    (2011, 11, 23, "勤労感謝の日"),
    (2011, 12, 23, "天皇誕生日"),
    (2012, 1, 1, "元日"),
    (2012, 1, 2, "休日"),
    (2012, 1, 9, "成人の日"),
    (2012, 2, 11, "建国記念の日"),
    (2012, 3, 20, "春分の日"),
    (2012, 4, 29, "昭和の日"),
    (2012, 4, 30, "休日"),
    (2012, 5, 3, "憲法記念日"),
    (2012, 5, 4, "みどりの日"),
    (2012, 5, 5, "こどもの日"),
    (2012, 7, 16, "海の日"),
    (2012, 9, 17, "敬老の日"),
    (2012, 9, 22, "秋分の日"),
    (2012, 10, 8, "体育の日"),
    (2012, 11, 3, "文化の日"),
    (2012, 11, 23, "勤労感謝の日"),
    (2012, 12, 23, "天皇誕生日"),
    (2012, 12, 24, "休日"),
    (2013, 1, 1, "元日"),
    (2013, 1, 14, "成人の日"),
    (2013, 2, 11, "建国記念の日"),
    (2013, 3, 20, "春分の日"),
    (2013, 4, 29, "昭和の日"),
    (2013, 5, 3, "憲法記念日"),
    (2013, 5, 4, "みどりの日"),
    (2013, 5, 5, "こどもの日"),
    (2013, 5, 6, "休日"),
    (2013, 7, 15, "海の日"),
    (2013, 9, 16, "敬老の日"),
    (2013, 9, 23, "秋分の日"),
    (2013, 10, 14, "体育の日"),
    (2013, 11, 3, "文化の日"),
    (2013, 11, 4, "休日"),
    (2013, 11, 23, "勤労感謝の日"),
    (2013, 12, 23, "天皇誕生日"),
    (2014, 1, 1, "元日"),
    (2014, 1, 13, "成人の日"),
    (2014, 2, 11, "建国記念の日"),
    (2014, 3, 21, "春分の日"),
    (2014, 4, 29, "昭和の日"),
    (2014, 5, 3, "憲法記念日"),
    (2014, 5, 4, "みどりの日"),
    (2014, 5, 5, "こどもの日"),
    (2014, 5, 6, "休日"),
    (2014, 7, 21, "海の日"),
    (2014, 9, 15, "敬老の日"),
    (2014, 9, 23, "秋分の日"),
    (2014, 10, 13, "体育の日"),
    (2014, 11, 3, "文化の日"),
    (2014, 11, 23, "勤労感謝の日"),
    (2014, 11, 24, "休日"),
    (2014, 12, 23, "天皇誕生日"),
    (2015, 1, 1, "元日"),
    (2015, 1, 12, "成人の日"),
    (2015, 2, 11, "建国記念の日"),
    (2015, 3, 21, "春分の日"),
    (2015, 4, 29, "昭和の日"),
    (2015, 5, 3, "憲法記念日"),
    (2015, 5, 4, "みどりの日"),
    (2015, 5, 5, "こどもの日"),
    (2015, 5, 6, "休日"),
    (2015, 7, 20, "海の日"),
    (2015, 9, 21, "敬老の日"),
    (2015, 9, 22, "休日"),
    (2015, 9, 23, "秋分の日"),
    (2015, 10, 12, "体育の日"),
    (2015, 11, 3, "文化の日"),
    (2015, 11, 23, "勤労感謝の日"),
    (2015, 12, 23, "天皇誕生日"),
    (2016, 1, 1, "元日"),
    (2016, 1, 11, "成人の日"),
    (2016, 2, 11, "建国記念の日"),
    (2016, 3, 20, "春分の日"),
    (2016, 3, 21, "休日"),
    (2016, 4, 29, "昭和の日"),
    (2016, 5, 3, "憲法記念日"),
    (2016, 5, 4, "みどりの日"),
    (2016, 5, 5, "こどもの日"),
    (2016, 7, 18, "海の日"),
    (2016, 8, 11, "山の日"),
    (2016, 9, 19, "敬老の日"),
    (2016, 9, 22, "秋分の日"),
    (2016, 10, 10, "体育の日"),
    (2016, 11, 3, "文化の日"),
    (2016, 11, 23, "勤労感謝の日"),
    (2016, 12, 23, "天皇誕生日"),
    (2017, 1, 1, "元日"),
    (2017, 1, 2, "休日"),
    (2017, 1, 9, "成人の日"),
    (2017, 2, 11, "建国記念の日"),
    (2017, 3, 20, "春分の日"),
    (2017, 4, 29, "昭和の日"),
    (2017, 5, 3, "憲法記念日"),
    (2017, 5, 4, "みどりの日"),
    (2017, 5, 5, "こどもの日"),
    (2017, 7, 17, "海の日"),
    (2017, 8, 11, "山の日"),
    (2017, 9, 18, "敬老の日"),
    (2017, 9, 23, "秋分の日"),
    (2017, 10, 9, "体育の日"),
    (2017, 11, 3, "文化の日"),
    (2017, 11, 23, "勤労感謝の日"),
    (2017, 12, 23, "天皇誕生日"),
    (2018, 1, 1, "元日"),
    (2018, 1, 8, "成人の日"),
    (2018, 2, 11, "建国記念の日"),
    (2018, 2, 12, "休日"),
    (2018, 3, 21, "春分の日"),
    (2018, 4, 29, "昭和の日"),
    (2018, 4, 30, "休日"),
    (2018, 5, 3, "憲法記念日"),
    (2018, 5, 4, "みどりの日"),
    (2018, 5, 5, "こどもの日"),
    (2018, 7, 16, "海の日"),
    (2018, 8, 11, "山の日"),
    (2018, 9, 17, "敬老の日"),
    (2018, 9, 23, "秋分の日"),
    (2018, 9, 24, "休日"),
    (2018, 10, 8, "体育の日"),
    (2018, 11, 3, "文化の日"),
    (2018, 11, 23, "勤労感謝の日"),
    (2018, 12, 23, "天皇誕生日"),
    (2018, 12, 24, "休日"),
    (2019, 1, 1, "元日"),
    (2019, 1, 14, "成人の日"),
    (2019, 2, 11, "建国記念の日"),
    (2019, 3, 21, "春分の日"),
    (2019, 4, 29, "昭和の日"),
    (2019, 4, 30, "休日"),
    (2019, 5, 1, "休日（祝日扱い）"),
    (2019, 5, 2, "休日"),
    (2019, 5, 3, "憲法記念日"),
    (2019, 5, 4, "みどりの日"),
    (2019, 5, 5, "こどもの日"),
    (2019, 5, 6, "休日"),
    (2019, 7, 15, "海の日"),
    (2019, 8, 11, "山の日"),
    (2019, 8, 12, "休日"),
    (2019, 9, 16, "敬老の日"),
    (2019, 9, 23, "秋分の日"),
    (2019, 10, 14, "体育の日"),
    (2019, 10, 22, "休日（祝日扱い）"),
    (2019, 11, 3, "文化の日"),
    (2019, 11, 4, "休日"),
    (2019, 11, 23, "勤労感謝の日"),
    (2020, 1, 1, "元日"),
    (2020, 1, 13, "成人の日"),
    (2020, 2, 11, "建国記念の日"),
    (2020, 2, 23, "天皇誕生日"),
    (2020, 2, 24, "休日"),
    (2020, 3, 20, "春分の日"),
    (2020, 4, 29, "昭和の日"),
    (2020, 5, 3, "憲法記念日"),
    (2020, 5, 4, "みどりの日"),
    (2020, 5, 5, "こどもの日"),
    (2020, 5, 6, "休日"),
    (2020, 7, 23, "海の日"),
    (2020, 7, 24, "スポーツの日"),
    (2020, 8, 10, "山の日"),
    (2020, 9, 21, "敬老の日"),
    (2020, 9, 22, "秋分の日"),
    (2020, 11, 3, "文化の日"),
    (2020, 11, 23, "勤労感謝の日"),
    (2021, 1, 1, "元日"),
    (2021, 1, 11, "成人の日"),
    (2021, 2, 11, "建国記念の日"),
    (2021, 2, 23, "天皇誕生日"),
    (2021, 3, 20, "春分の日"),
    (2021, 4, 29, "昭和の日"),
    (2021, 5, 3, "憲法記念日"),
    (2021, 5, 4, "みどりの日"),
    (2021, 5, 5, "こどもの日"),
    (2021, 7, 22, "海の日"),
    (2021, 7, 23, "スポーツの日"),
    (2021, 8, 8, "山の日"),
    (2021, 8, 9, "休日"),
    (2021, 9, 20, "敬老の日"),
    (2021, 9, 23, "秋分の日"),
    (2021, 11, 3, "文化の日"),
    (2021, 11, 23, "勤労感謝の日"),
    (2022, 1, 1, "元日"),
    (2022, 1, 10, "成人の日"),
    (2022, 2, 11, "建国記念の日"),
    (2022, 2, 23, "天皇誕生日"),
    (2022, 3, 21, "春分の日"),
    (2022, 4, 29, "昭和の日"),
    (2022, 5, 3, "憲法記念日"),
    (2022, 5, 4, "みどりの日"),
    (2022, 5, 5, "こどもの日"),
    (2022, 7, 18, "海の日"),
    (2022, 8, 11, "山の日"),
    (2022, 9, 19, "敬老の日"),
    (2022, 9, 23, "秋分の日"),
    (2022, 10, 10, "スポーツの日"),
    (2022, 11, 3, "文化の日"),
    (2022, 11, 23, "勤労感謝の日"),
    (2023, 1, 1, "元日"),
    (2023, 1, 2, "休日"),
    (2023, 1, 9, "成人の日"),
    (2023, 2, 11, "建国記念の日"),
    (2023, 2, 23, "天皇誕生日"),
    (2023, 3, 21, "春分の日"),
    (2023, 4, 29, "昭和の日"),
    (2023, 5, 3, "憲法記念日"),
    (2023, 5, 4, "みどりの日"),
    (2023, 5, 5, "こどもの日"),
    (2023, 7, 17, "海の日"),
    (2023, 8, 11, "山の日"),
    (2023, 9, 18, "敬老の日"),
    (2023, 9, 23, "秋分の日"),
    (2023, 10, 9, "スポーツの日"),
    (2023, 11, 3, "文化の日"),
    (2023, 11, 23, "勤労感謝の日"),
    (2024, 1, 1, "元日"),
    (2024, 1, 8, "成人の日"),
    (2024, 2, 11, "建国記念の日"),
    (2024, 2, 12, "休日"),
    (2024, 2, 23, "天皇誕生日"),
    (2024, 3, 20, "春分の日"),
    (2024, 4, 29, "昭和の日"),
    (2024, 5, 3, "憲法記念日"),
    (2024, 5, 4, "みどりの日"),
    (2024, 5, 5, "こどもの日"),
    (2024, 5, 6, "休日"),
    (2024, 7, 15, "海の日"),
    (2024, 8, 11, "山の日"),
    (2024, 8, 12, "休日"),
    (2024, 9, 16, "敬老の日"),
    (2024, 9, 22, "秋分の日"),
    (2024, 9, 23, "休日"),
    (2024, 10, 14, "スポーツの日"),
    (2024, 11, 3, "文化の日"),
    (2024, 11, 4, "休日"),
    (2024, 11, 23, "勤労感謝の日"),
    (2025, 1, 1, "元日"),
    (2025, 1, 13, "成人の日"),
    (2025, 2, 11, "建国記念の日"),
    (2025, 2, 23, "天皇誕生日"),
    (2025, 2, 24, "休日"),
    (2025, 3, 20, "春分の日"),
    (2025, 4, 29, "昭和の日"),
    (2025, 5, 3, "憲法記念日"),
    (2025, 5, 4, "みどりの日"),
    (2025, 5, 5, "こどもの日"),
    (2025, 5, 6, "休日"),
    (2025, 7, 21, "海の日"),
    (2025, 8, 11, "山の日"),
    (2025, 9, 15, "敬老の日"),
    (2025, 9, 23, "秋分の日"),
    (2025, 10, 13, "スポーツの日"),
    (2025, 11, 3, "文化の日"),
    (2025, 11, 23, "勤労感謝の日"),
    (2025, 11, 24, "休日"),
    (2026, 1, 1, "元日"),
    (2026, 1, 12, "成人の日"),
    (2026, 2, 11, "建国記念の日"),
    (2026, 2, 23, "天皇誕生日"),
    (2026, 3, 20, "春分の日"),
    (2026, 4, 29, "昭和の日"),
    (2026, 5, 3, "憲法記念日"),
    (2026, 5, 4, "みどりの日"),
    (2026, 5, 5, "こどもの日"),
    (2026, 5, 6, "休日"),
    (2026, 7, 20, "海の日"),
    (2026, 8, 11, "山の日"),
    (2026, 9, 21, "敬老の日"),
    (2026, 9, 22, "休日"),
    (2026, 9, 23, "秋分の日"),
    (2026, 10, 12, "スポーツの日"),
    (2026, 11, 3, "文化の日"),
    (2026, 11, 23, "勤労感謝の日"),
    (2027, 1, 1, "元日"),
    (2027, 1, 11, "成人の日"),
    (2027, 2, 11, "建国記念の日"),
    (2027, 2, 23, "天皇誕生日"),
    (2027, 3, 21, "春分の日"),
    (2027, 3, 22, "休日"),
    (2027, 4, 29, "昭和の日"),
    (2027, 5, 3, "憲法記念日"),
    (2027, 5, 4, "みどりの日"),
    (2027, 5, 5, "こどもの日"),
    (2027, 7, 19, "海の日"),
    (2027, 8, 11, "山の日"),
    (2027, 9, 20, "敬老の日"),
    (2027, 9, 23, "秋分の日"),
    (2027, 10, 11, "スポーツの日"),
    (2027, 11, 3, "文化の日"),
    (2027, 11, 23, "勤労感謝の日"),
];
