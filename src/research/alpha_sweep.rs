use colored::Colorize;
use serde::{
    Serialize,
    Deserialize,
};
use tracing::info;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

use crate::{
    Classifier,
    Corpus,
    Tokenizer,
};
use crate::checkers;
use crate::constants::SWEEP_CSV_HEADER;
use crate::error::{NBayesError, Result};

use super::evaluation::Evaluation;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;


/// One row of the sweep: the accuracy for one smoothing parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRecord {
    /// The smoothing parameter.
    pub alpha: f64,
    /// Accuracy as a percentage.
    pub accuracy: f64,
    /// Number of correctly classified documents.
    pub n_correct: usize,
    /// Number of classified documents.
    pub n_total: usize,
    /// Cumulative running time in milliseconds.
    pub time: u64,
}


impl SweepRecord {
    /// Writes `records` to `filename` as a JSON array.
    pub fn write_json<P: AsRef<Path>>(records: &[Self], filename: P)
        -> Result<()>
    {
        let path = filename.as_ref();
        let file = File::create(path)
            .map_err(|e| NBayesError::io(path, e))?;
        serde_json::to_writer_pretty(file, records)?;
        Ok(())
    }
}


/// Struct `AlphaSweep` evaluates a trained classifier
/// for every smoothing parameter in a list
/// and logs the accuracy and the running time of each run.
/// # Example
/// ```no_run
/// use textbayes::prelude::*;
/// use textbayes::research::{AlphaSweep, plot_accuracy};
///
/// # let (train, test) = (Corpus::default(), Corpus::default());
/// let nbayes = TextNB::init();
/// let f = nbayes.train(&train).unwrap();
///
/// let records = AlphaSweep::new(&f, nbayes.tokenizer(), &test)
///     .alphas(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0])
///     .run("sweep.csv")
///     .unwrap();
/// plot_accuracy(&records, "sweep.svg").unwrap();
/// ```
pub struct AlphaSweep<'a, H, T: ?Sized> {
    classifier: &'a H,
    tokenizer: &'a T,
    test: &'a Corpus,
    alphas: Vec<f64>,
    verbose: bool,
}


impl<'a, H, T: ?Sized> AlphaSweep<'a, H, T> {
    /// Construct a new instance of `AlphaSweep.`
    /// By default, `alpha` runs over `1, 2, ..., 10`.
    pub fn new(classifier: &'a H, tokenizer: &'a T, test: &'a Corpus)
        -> Self
    {
        Self {
            classifier,
            tokenizer,
            test,
            alphas: (1..=10).map(f64::from).collect(),
            verbose: true,
        }
    }


    /// Set the smoothing parameters to evaluate, in order.
    pub fn alphas(mut self, alphas: Vec<f64>) -> Self {
        alphas.iter()
            .copied()
            .for_each(checkers::smoothing_parameter);
        self.alphas = alphas;
        self
    }


    /// Set the flag whether to print the log to the standard output.
    /// Default is `true`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "ALPHA".bold().red(),
            "ACC. (%)".bold().blue(),
            "CORRECT".bold().green(),
            "TIME".bold().cyan(),
        );
    }
}


impl<H, T> AlphaSweep<'_, H, T>
    where H: Classifier + Sync,
          T: Tokenizer + Sync + ?Sized,
{
    /// Runs the evaluation for every alpha,
    /// writes one CSV row per alpha to `filename`,
    /// and returns the records.
    pub fn run<P: AsRef<Path>>(&self, filename: P) -> Result<Vec<SweepRecord>> {
        let path = filename.as_ref();
        let mut file = File::create(path)
            .map_err(|e| NBayesError::io(path, e))?;
        file.write_all(SWEEP_CSV_HEADER.as_bytes())
            .map_err(|e| NBayesError::io(path, e))?;

        if self.verbose { self.print_log_header(); }

        let mut time_acc: u128 = 0;
        let mut records = Vec::with_capacity(self.alphas.len());
        for (i, &alpha) in self.alphas.iter().enumerate() {
            let now = Instant::now();
            let report = Evaluation::new(self.classifier, self.tokenizer)
                .alpha(alpha)
                .run(self.test)?;
            time_acc += now.elapsed().as_millis();

            let record = SweepRecord {
                alpha,
                accuracy: report.accuracy(),
                n_correct: report.n_correct,
                n_total: report.n_total,
                time: time_acc as u64,
            };

            let line = format!(
                "{},{},{},{},{}\n",
                record.alpha,
                record.accuracy,
                record.n_correct,
                record.n_total,
                record.time,
            );
            file.write_all(line.as_bytes())
                .map_err(|e| NBayesError::io(path, e))?;

            if self.verbose {
                let tag = if i + 1 == self.alphas.len() {
                    "[FIN]".bold().bright_green()
                } else {
                    "[LOG]".bold().magenta()
                };
                println!(
                    "{} {}\t{}\t{}\t{}",
                    tag,
                    format!("{:>WIDTH$.PREC_WIDTH$}", alpha).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", record.accuracy).blue(),
                    format!("{:>WIDTH$}", record.n_correct).green(),
                    time_format(time_acc).bold().cyan(),
                );
            }
            records.push(record);
        }

        if let Some(best) = best_record(&records) {
            info!(alpha = best.alpha, accuracy = best.accuracy, "best smoothing parameter");
        }
        Ok(records)
    }
}


/// Returns the record with the highest accuracy.
/// The earliest record wins a tie.
pub(crate) fn best_record(records: &[SweepRecord]) -> Option<&SweepRecord> {
    records.iter()
        .fold(None, |best: Option<&SweepRecord>, record| match best {
            Some(b) if b.accuracy >= record.accuracy => Some(b),
            _ => Some(record),
        })
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Document, Label, TextNB};

    fn corpora() -> (Corpus, Corpus) {
        let train = Corpus::new(vec![
            Document::new("good good great fun", Label::Positive),
            Document::new("great acting good plot", Label::Positive),
            Document::new("bad bad terrible boring", Label::Negative),
            Document::new("boring plot bad acting", Label::Negative),
        ]);
        let test = Corpus::new(vec![
            Document::new("good fun", Label::Positive),
            Document::new("terrible boring", Label::Negative),
            Document::new("great plot", Label::Positive),
        ]);
        (train, test)
    }

    #[test]
    fn test_sweep_writes_csv() {
        let (train, test) = corpora();
        let nbayes = TextNB::init();
        let f = nbayes.train(&train).unwrap();

        let tmp = tempfile::tempdir().unwrap();
        let csv = tmp.path().join("sweep.csv");
        let records = AlphaSweep::new(&f, nbayes.tokenizer(), &test)
            .alphas(vec![0.5, 1.0, 2.0])
            .verbose(false)
            .run(&csv)
            .unwrap();

        assert_eq!(records.len(), 3);
        for (record, alpha) in records.iter().zip([0.5, 1.0, 2.0]) {
            assert_eq!(record.alpha, alpha);
            assert_eq!(record.n_total, 3);
            assert!((0f64..=100f64).contains(&record.accuracy));
        }

        let content = std::fs::read_to_string(&csv).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(SWEEP_CSV_HEADER.trim_end()));
        assert_eq!(lines.count(), 3);

        let json = tmp.path().join("sweep.json");
        SweepRecord::write_json(&records, &json).unwrap();
        let back: Vec<SweepRecord> = serde_json::from_str(
            &std::fs::read_to_string(&json).unwrap()
        ).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn test_best_record() {
        let record = |alpha, accuracy| SweepRecord {
            alpha, accuracy, n_correct: 0, n_total: 0, time: 0,
        };
        let records = vec![record(1.0, 80.0), record(2.0, 85.0), record(3.0, 85.0)];
        assert_eq!(best_record(&records).map(|r| r.alpha), Some(2.0));
        assert!(best_record(&[]).is_none());
    }

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(12), "  0.012s");
        assert_eq!(time_format(61_000), " 01m 01s");
    }

    #[test]
    #[should_panic]
    fn test_negative_alpha() {
        let (train, test) = corpora();
        let nbayes = TextNB::init();
        let f = nbayes.train(&train).unwrap();
        let _ = AlphaSweep::new(&f, nbayes.tokenizer(), &test)
            .alphas(vec![1.0, -1.0]);
    }
}
