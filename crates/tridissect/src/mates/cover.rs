//! Exact cover by backtracking over an explicit choice stack.

use tracing::trace;

/// One branching point: the candidate rows of the chosen column.
#[derive(Clone, Debug)]
struct Frame {
    options: Vec<usize>,
    next: usize,
    selected: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Descend,
    Advance,
    Done,
}

/// Lazy enumeration of all exact covers of a 0-1 matrix given by its rows.
///
/// Each item lists the selected row indices, outermost choice first. The column
/// with the fewest available rows is branched on (lowest index on ties), and its
/// rows are tried in increasing index order. Work happens only inside `next()`;
/// dropping the iterator early leaves nothing to clean up.
#[derive(Clone, Debug)]
pub struct ExactCover {
    rows: Vec<Vec<usize>>,
    col_rows: Vec<Vec<usize>>,
    covered: Vec<bool>,
    // number of covered columns each row touches; 0 = available
    blocked: Vec<u32>,
    stack: Vec<Frame>,
    step: Step,
}

impl ExactCover {
    /// `num_cols` is widened if a row mentions a larger column.
    pub fn new(num_cols: usize, rows: Vec<Vec<usize>>) -> Self {
        let width = rows
            .iter()
            .flat_map(|r| r.iter().copied())
            .map(|c| c + 1)
            .fold(num_cols, usize::max);
        let mut col_rows = vec![Vec::new(); width];
        for (i, row) in rows.iter().enumerate() {
            for &c in row {
                col_rows[c].push(i);
            }
        }
        let n_rows = rows.len();
        Self {
            rows,
            col_rows,
            covered: vec![false; width],
            blocked: vec![0; n_rows],
            stack: Vec::new(),
            step: Step::Descend,
        }
    }

    pub fn num_cols(&self) -> usize {
        self.col_rows.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, i: usize) -> &[usize] {
        &self.rows[i]
    }

    /// Rewind to the initial state; the same covers are produced again.
    pub fn restart(&mut self) {
        self.covered.iter_mut().for_each(|c| *c = false);
        self.blocked.iter_mut().for_each(|b| *b = 0);
        self.stack.clear();
        self.step = Step::Descend;
    }

    fn available(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        self.col_rows[col]
            .iter()
            .copied()
            .filter(move |&r| self.blocked[r] == 0)
    }

    fn pick_column(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for c in 0..self.col_rows.len() {
            if self.covered[c] {
                continue;
            }
            let k = self.available(c).count();
            if best.map_or(true, |(_, bk)| k < bk) {
                best = Some((c, k));
                if k == 0 {
                    break;
                }
            }
        }
        best.map(|(c, _)| c)
    }

    fn select(&mut self, row: usize) {
        for &c in &self.rows[row] {
            self.covered[c] = true;
            for &r in &self.col_rows[c] {
                self.blocked[r] += 1;
            }
        }
    }

    fn unselect(&mut self, row: usize) {
        for &c in &self.rows[row] {
            self.covered[c] = false;
            for &r in &self.col_rows[c] {
                self.blocked[r] -= 1;
            }
        }
    }

    fn solution(&self) -> Vec<usize> {
        self.stack.iter().filter_map(|f| f.selected).collect()
    }
}

impl Iterator for ExactCover {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        loop {
            match self.step {
                Step::Done => return None,
                Step::Descend => match self.pick_column() {
                    None => {
                        self.step = Step::Advance;
                        return Some(self.solution());
                    }
                    Some(col) => {
                        let options: Vec<usize> = self.available(col).collect();
                        trace!(col, options = options.len(), depth = self.stack.len(), "branch");
                        self.stack.push(Frame {
                            options,
                            next: 0,
                            selected: None,
                        });
                        self.step = Step::Advance;
                    }
                },
                Step::Advance => {
                    let (prev, choice) = match self.stack.last_mut() {
                        None => {
                            self.step = Step::Done;
                            continue;
                        }
                        Some(frame) => {
                            let prev = frame.selected.take();
                            let choice = frame.options.get(frame.next).copied();
                            if choice.is_some() {
                                frame.next += 1;
                                frame.selected = choice;
                            }
                            (prev, choice)
                        }
                    };
                    if let Some(row) = prev {
                        self.unselect(row);
                    }
                    match choice {
                        Some(row) => {
                            self.select(row);
                            self.step = Step::Descend;
                        }
                        None => {
                            self.stack.pop();
                        }
                    }
                }
            }
        }
    }
}
