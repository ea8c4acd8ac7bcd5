use crate::schedule::Schedule;
use crate::variant::Variant;
use crate::word::{Word, choice, majority};

/// The running hash state carried from block to block.
pub type ChainingValue<W> = [W; 8];

/// Working variables `a..h` of a single block compression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingVars<W>([W; 8]);

impl<W: Word> WorkingVars<W> {
    pub fn new(state: &ChainingValue<W>) -> Self {
        Self(*state)
    }

    pub fn a(&self) -> W {
        self.0[0]
    }

    pub fn b(&self) -> W {
        self.0[1]
    }

    pub fn c(&self) -> W {
        self.0[2]
    }

    pub fn d(&self) -> W {
        self.0[3]
    }

    pub fn e(&self) -> W {
        self.0[4]
    }

    pub fn f(&self) -> W {
        self.0[5]
    }

    pub fn g(&self) -> W {
        self.0[6]
    }

    pub fn h(&self) -> W {
        self.0[7]
    }

    /// Shifts every variable down one position; `e` absorbs `d + t1`, `a`
    /// becomes `t1 + t2`.
    fn shift(&mut self, t1: W, t2: W) {
        let [a, b, c, d, e, f, g, _] = self.0;
        self.0 = [t1.wrapping_add(t2), a, b, c, d.wrapping_add(t1), e, f, g];
    }

    /// Adds the variables back into `state` word by word.
    fn fold_into(self, state: &mut ChainingValue<W>) {
        for (word, var) in state.iter_mut().zip(self.0) {
            *word = word.wrapping_add(var);
        }
    }
}

/// One round of the SHA-2 compression function.
#[inline]
pub fn round<V: Variant>(vars: &mut WorkingVars<V::Word>, k: V::Word, w: V::Word) {
    let sigma = V::ROTATIONS;
    let t1 = vars
        .h()
        .wrapping_add(sigma.big_sigma1(vars.e()))
        .wrapping_add(choice(vars.e(), vars.f(), vars.g()))
        .wrapping_add(k)
        .wrapping_add(w);
    let t2 = sigma
        .big_sigma0(vars.a())
        .wrapping_add(majority(vars.a(), vars.b(), vars.c()));
    vars.shift(t1, t2);
}

/// Folds one expanded block into the chaining value.
pub fn compress<V: Variant>(state: &mut ChainingValue<V::Word>, schedule: &Schedule<V>) {
    let mut vars = WorkingVars::new(state);
    for (&k, &w) in V::ROUND_CONSTANTS.iter().zip(schedule.words()) {
        round::<V>(&mut vars, k, w);
    }
    vars.fold_into(state);
}
