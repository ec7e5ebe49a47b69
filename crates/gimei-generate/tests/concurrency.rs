use std::thread;

use gimei_generate::{Corpus, CorpusGroup, Gimei, NameKind, Renderable};

const WORKERS: usize = 8;
const GROUPS: [CorpusGroup; 3] = [
    CorpusGroup::Names,
    CorpusGroup::Addresses,
    CorpusGroup::PostalCodes,
];

#[test]
fn concurrent_first_use_shares_one_table_set_per_group() {
    let gimei = Gimei::with_corpus(Corpus::embedded());
    for group in GROUPS {
        assert!(!gimei.corpus().is_loaded(group));
    }

    let pointers: Vec<(usize, usize, usize)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|_| {
                scope.spawn(|| {
                    let corpus = gimei.corpus();
                    (
                        corpus.names() as *const _ as usize,
                        corpus.addresses() as *const _ as usize,
                        corpus.postal_codes() as *const _ as usize,
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(pointers.len(), WORKERS);
    assert!(pointers.windows(2).all(|pair| pair[0] == pair[1]));
    for group in GROUPS {
        assert!(gimei.corpus().is_loaded(group));
    }
}

#[test]
fn constructors_and_finders_are_safe_under_contention() {
    let gimei = Gimei::seeded(12);

    thread::scope(|scope| {
        for _ in 0..WORKERS {
            scope.spawn(|| {
                for _ in 0..100 {
                    for kind in NameKind::ALL {
                        let name = gimei.generate_name(kind);
                        assert!(name.kanji().contains(' '));
                    }

                    let name = gimei.name();
                    assert!(gimei.find_name_by_kanji(&name.kanji()).is_some());
                    assert!(gimei.find_name_by_hiragana(&name.hiragana()).is_some());
                    assert!(gimei.find_name_by_katakana(&name.katakana()).is_some());
                    assert!(gimei.find_name_by_romaji(&name.romaji()).is_some());

                    let address = gimei.address();
                    assert!(gimei.find_address_by_kanji(&address.kanji()).is_some());
                    assert!(gimei.find_address_by_hiragana(&address.hiragana()).is_some());
                    assert!(gimei.find_address_by_katakana(&address.katakana()).is_some());

                    gimei.prefecture();
                    gimei.city();
                    gimei.town();
                    gimei.postal_code();
                }
            });
        }
    });
}

#[test]
fn reseeding_while_sampling_does_not_corrupt_the_source() {
    let gimei = Gimei::seeded(0);

    thread::scope(|scope| {
        scope.spawn(|| {
            for seed in 0..200 {
                gimei.reseed(seed);
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let name = gimei.name();
                    assert!(name.is_male() || name.is_female());
                }
            });
        }
    });
}

#[test]
fn forked_workers_are_individually_deterministic() {
    let parent = Gimei::new();

    let transcripts: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|_| {
                let worker = parent.fork(31);
                scope.spawn(move || {
                    (0..50)
                        .map(|_| worker.name().romaji())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker panicked"))
            .collect()
    });

    assert!(transcripts.windows(2).all(|pair| pair[0] == pair[1]));
}
