use docprint::{group, join, Doc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Annotation used by random docs: which literal the text came from.
pub type Ann = char;

const MAX_CHOICES: usize = 6;
const SIZE_RANGE: (usize, usize) = (1, 20);
const LITERAL_RANGE: (usize, usize) = (0, 6);

struct Generator {
    next_letter: char,
    rng: StdRng,
    num_choices: usize,
}

/// A random doc, containing at most a handful of choices so that the oracle
/// can still render it.
pub fn random_doc(seed: u64) -> Doc<Ann> {
    let mut gen = Generator::new(seed, MAX_CHOICES);
    let size = gen.rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1);
    gen.doc(size)
}

/// A random doc with no choices in it.
pub fn random_flat_doc(seed: u64) -> Doc<Ann> {
    let mut gen = Generator::new(seed, 0);
    let size = gen.rng.gen_range(SIZE_RANGE.0..SIZE_RANGE.1);
    gen.doc(size)
}

/// Between 1 and 30 words, each between 1 and `max_len` chars long.
pub fn random_words(seed: u64, max_len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(1..30);
    (0..count)
        .map(|i| {
            let len = rng.gen_range(1..=max_len);
            let letter = (b'a' + (i % 26) as u8) as char;
            (0..len).map(|_| letter).collect()
        })
        .collect()
}

impl Generator {
    fn new(seed: u64, num_choices: usize) -> Generator {
        Generator {
            next_letter: 'a',
            rng: StdRng::seed_from_u64(seed),
            num_choices,
        }
    }

    fn letter(&mut self) -> char {
        let letter = self.next_letter;
        self.next_letter = if letter == 'z' {
            'a'
        } else {
            ((letter as u8) + 1) as char
        };
        letter
    }

    fn doc(&mut self, size: usize) -> Doc<Ann> {
        match size {
            0 => panic!("Random doc: unexpected size 0"),
            1 => match self.rng.gen_range(0..6) {
                0 => Doc::empty(),
                1 | 2 | 3 => self.text(),
                4 | 5 => Doc::newline(),
                _ => unreachable!(),
            },
            _ => {
                let options = if self.num_choices > 0 { 8 } else { 5 };
                match self.rng.gen_range(0..options) {
                    0 => Doc::indent(self.doc(size - 1)),
                    1 => Doc::hang(self.doc(size - 1)),
                    2 | 3 | 4 => self.concat(size),
                    5 => self.choice(size),
                    6 => {
                        self.num_choices -= 1;
                        group(self.doc(size - 1))
                    }
                    7 => self.join(size),
                    _ => unreachable!(),
                }
            }
        }
    }

    fn text(&mut self) -> Doc<Ann> {
        let letter = self.letter();
        let len = self.rng.gen_range(LITERAL_RANGE.0..LITERAL_RANGE.1);
        let string: String = (0..len).map(|_| letter).collect();
        if self.rng.gen_bool(0.5) {
            Doc::styled(string, letter)
        } else {
            Doc::text(string)
        }
    }

    fn concat(&mut self, size: usize) -> Doc<Ann> {
        let left_size = self.rng.gen_range(1..size);
        let right_size = size - left_size;
        self.doc(left_size) + self.doc(right_size)
    }

    fn choice(&mut self, size: usize) -> Doc<Ann> {
        self.num_choices -= 1;
        let left_size = self.rng.gen_range(1..size);
        let right_size = size - left_size;
        Doc::choice(self.doc(left_size), self.doc(right_size))
    }

    /// Join a few small docs with a line separator.
    fn join(&mut self, size: usize) -> Doc<Ann> {
        self.num_choices -= 1;
        let count = self.rng.gen_range(1..=size.min(3));
        let elements: Vec<Doc<Ann>> = (0..count).map(|_| self.text()).collect();
        let separator = Doc::text(",") + Doc::line();
        join(elements, separator)
    }
}
