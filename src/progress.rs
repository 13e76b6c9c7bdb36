use crate::Budgets;
use crate::BudgetStatus;
use crate::Category;
use crate::Charset;
use crate::Kobo;
use crate::Locale;
use crate::MonthlyData;
use crate::util;

/// Cells in a progress bar.
const BAR_CELLS: usize = 10;

pub struct Progress<'a> {
    charset: &'a Charset,
    /// One row per expense category, in declaration order.
    rows: Vec<Row>,
    alignment_charlen: usize,
}

struct Row {
    label: &'static str,
    amounts: String,
    filled: usize,
    percent: i128,
    status: BudgetStatus,
    overage: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: Charset,
    pub locale: Locale,
    pub budgets: Budgets,
    pub data: MonthlyData,
}

impl Config {
    pub fn to_progress(&'_ self) -> Progress<'_> {
        let rows = Category::EXPENSES
            .iter()
            .map(|&category| self.row(category))
            .collect::<Vec<_>>();

        fn char_count(row: &Row) -> usize {
            row.label.len()
                + util::BOUNDING_SPACES_COUNT
                + util::MIN_DASHES_COUNT
                + row.amounts.chars().count()
        }
        let alignment_charlen = rows.iter().map(char_count).max().unwrap_or_default();

        Progress {
            charset: &self.charset,
            rows,
            alignment_charlen,
        }
    }

    fn row(&self, category: Category) -> Row {
        let spent = self.data.category(category);
        let limit = self.budgets.get(category);
        let status = BudgetStatus::classify(spent, limit);

        // A zero limit leaves nothing to fill against.
        let (filled, percent) = if limit <= Kobo(0) {
            (0, 0)
        } else {
            let filled = (spent.0 as i128 * BAR_CELLS as i128 / limit.0 as i128)
                .clamp(0, BAR_CELLS as i128) as usize;
            let percent = (spent.0 as i128 * 100 / limit.0 as i128).max(0);
            (filled, percent)
        };
        let overage = (status == BudgetStatus::Over).then(|| {
            let overspent = spent - limit.max(Kobo(0));
            format!("{} over budget", self.locale.currency(overspent))
        });

        Row {
            label: category.label(),
            amounts: format!(
                "{} / {}",
                self.locale.currency(spent),
                self.locale.currency(limit)
            ),
            filled,
            percent,
            status,
            overage,
        }
    }
}

impl Progress<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, row: &Row) -> std::fmt::Result {
        let dash_count = self.alignment_charlen
            - row.label.len()
            - util::BOUNDING_SPACES_COUNT
            - row.amounts.chars().count();
        w.write_str(row.label)?;
        w.write_char(' ')?;
        for _ in 0..dash_count {
            w.write_char(self.charset.dash)?;
        }
        w.write_char(' ')?;
        writeln!(w, "{}", row.amounts)?;

        write!(w, "  {}", self.charset.chart_axis)?;
        for _ in 0..row.filled {
            w.write_char(self.charset.bar_filled)?;
        }
        for _ in row.filled..BAR_CELLS {
            w.write_char(self.charset.bar_empty)?;
        }
        write!(w, "{} {}% ", self.charset.chart_axis, row.percent)?;
        let mut status = row.status.label().to_string();
        if self.charset.color {
            status = match row.status {
                BudgetStatus::Under => colored::Colorize::green(status.as_str()),
                BudgetStatus::Approaching => colored::Colorize::yellow(status.as_str()),
                BudgetStatus::Over => colored::Colorize::red(status.as_str()),
            }
            .to_string();
        }
        writeln!(w, "{}", status)?;

        if let Some(overage) = &row.overage {
            writeln!(w, "  {}", overage)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Progress<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.rows.iter().try_for_each(|row| self.draw(f, row))
    }
}
