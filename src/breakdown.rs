use crate::Category;
use crate::Charset;
use crate::Kobo;
use crate::Locale;
use crate::MonthlyData;
use crate::util;

pub struct Breakdown<'a> {
    charset: &'a Charset,
    /// Nonzero expense categories, most spent first.
    rows: Vec<Row>,
    label_charlen: usize,
}

struct Row {
    label: &'static str,
    suffix: String,
    barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: Charset,
    pub locale: Locale,
    pub term_width: usize,
    pub data: MonthlyData,
}

impl Config {
    pub fn to_breakdown(&'_ self) -> Breakdown<'_> {
        let mut spending = Category::EXPENSES
            .iter()
            .map(|&category| (category, self.data.category(category)))
            .filter(|&(_, spent)| spent > Kobo(0))
            .collect::<Vec<_>>();
        spending.sort_by(|a, b| b.1.cmp(&a.1));

        let total = self.data.expenses();
        let suffixes = spending
            .iter()
            .map(|&(_, spent)| {
                let share = spent.0 as f64 * 100.0 / total.0 as f64;
                format!("{} ({:.1}%)", self.locale.currency(spent), share)
            })
            .collect::<Vec<_>>();

        let label_charlen = spending
            .iter()
            .map(|(category, _)| category.label().len())
            .max()
            .unwrap_or_default();
        let suffix_charlen = suffixes
            .iter()
            .map(|suffix| suffix.chars().count())
            .max()
            .unwrap_or_default();
        let max_barlen = self.term_width.max(util::MIN_TERM_WIDTH).saturating_sub(
            label_charlen
                + util::BOUNDING_SPACES_COUNT
                + 1 // vertical divider just before bar
                + suffix_charlen,
        );

        let max_val = spending
            .first()
            .map(|&(_, spent)| spent)
            .unwrap_or_default();
        let rows = spending
            .into_iter()
            .zip(suffixes)
            .map(|((category, spent), suffix)| {
                let x = (spent.0 as f64) / (max_val.0 as f64) * (max_barlen as f64);
                Row {
                    label: category.label(),
                    suffix,
                    barlen: max_barlen.min(x.round() as usize),
                }
            })
            .collect();

        Breakdown {
            charset: &self.charset,
            rows,
            label_charlen,
        }
    }
}

impl Breakdown<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, row: &Row) -> std::fmt::Result {
        w.write_str(row.label)?;
        for _ in row.label.len()..self.label_charlen {
            w.write_char(' ')?;
        }
        write!(w, " {}", self.charset.chart_axis)?;
        if row.barlen > 0 {
            let mut bars = self.charset.chart_bar.to_string().repeat(row.barlen);
            if self.charset.color {
                bars = colored::Colorize::red(bars.as_str()).to_string();
            }
            w.write_str(&bars)?;
            w.write_char(' ')?;
        }
        writeln!(w, "{}", row.suffix)?;
        Ok(())
    }
}

impl std::fmt::Display for Breakdown<'_> {
    /// Writes a terminating newline. Writes nothing at all when the month
    /// has no expenses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.rows.iter().try_for_each(|row| self.draw(f, row))
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;
    use crate::Transactionlist;

    #[rstest]
    #[case("[]", "")]
    #[case(
        r#"[{"id":"a","type":"income","amount":100000,"category":"income","date":"2024-03-01"}]"#,
        ""
    )]
    #[case(
        r#"[
            {"id":"a","type":"income","amount":100000,"category":"income","date":"2024-03-01"},
            {"id":"b","type":"expense","amount":40000,"category":"food","date":"2024-03-10"},
            {"id":"c","type":"expense","amount":45000,"category":"transport","date":"2024-03-11"},
            {"id":"d","type":"expense","amount":12000,"category":"lifestyle","date":"2024-03-12"}
        ]"#,
        indoc!(
            "
            Transport (Fuel, Public) |+++++++++++++++++++++++++++++++++++++++++ ₦450 (46.4%)
            Food & Groceries         |++++++++++++++++++++++++++++++++++++ ₦400 (41.2%)
            Personal / Misc          |+++++++++++ ₦120 (12.4%)
            "
        )
    )]
    #[case(
        r#"[{"id":"a","type":"expense","amount":25000,"category":"food","date":"2024-03-10"}]"#,
        indoc!(
            "
            Food & Groceries |++++++++++++++++++++++++++++++++++++++++++++++++ ₦250 (100.0%)
            "
        )
    )]
    #[case(
        r#"[{"id":"a","type":"expense","amount":25000,"category":"food","date":"2024-04-10"}]"#,
        ""
    )]
    fn test_to_breakdown(#[case] transactions: Transactionlist, #[case] want: &str) {
        let config = Config {
            charset: Charset::default(),
            locale: Locale::default(),
            term_width: 80,
            data: MonthlyData::compute(&transactions, "2024-03".parse().unwrap()),
        };
        assert_eq!(config.to_breakdown().to_string(), want)
    }
}
