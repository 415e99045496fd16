criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        abstracting_fcpa_actions,
        abstracting_fcmqhtpa_actions,
        building_holdem_indexer,
        indexing_river_deal,
        bucketing_river_null,
        bucketing_river_suit,
        precomputing_river_suit,
        precomputing_batch_parallel,
}

fn abstracting_fcpa_actions(c: &mut criterion::Criterion) {
    let spot = Spot::new(vec![150, 450, 450, 300], 0).raising(750, 20000);
    c.bench_function("abstract FCPA actions at a 4-way node", |b| {
        b.iter(|| ActionAbstraction::Fcpa.actions(&spot))
    });
}

fn abstracting_fcmqhtpa_actions(c: &mut criterion::Criterion) {
    let spot = Spot::new(vec![150, 450, 450, 300], 0).raising(750, 20000);
    c.bench_function("abstract FCMQHTPA actions at a 4-way node", |b| {
        b.iter(|| ActionAbstraction::Fcmqhtpa.actions(&spot))
    });
}

fn building_holdem_indexer(c: &mut criterion::Criterion) {
    c.bench_function("build the hold'em suit isomorphism tables", |b| {
        b.iter(|| Indexer::new(4, 13, &[2, 3, 1, 1]))
    });
}

fn indexing_river_deal(c: &mut criterion::Criterion) {
    let indexer = Indexer::new(4, 13, &[2, 3, 1, 1]).expect("hold'em indexer");
    let ref mut rng = rand::rng();
    let mut deck = Deck::new(4, 13);
    let cards = (0..7).map(|_| deck.draw(rng)).collect::<Vec<_>>();
    c.bench_function("index a 7-card River deal", |b| {
        b.iter(|| indexer.index(&cards))
    });
}

fn bucketing_river_null(c: &mut criterion::Criterion) {
    let ref config = Config::holdem();
    let null = CardAbstraction::new(CardPolicy::Null, config).expect("null abstraction");
    let deal = Deal::random(config, 3, &mut rand::rng());
    c.bench_function("bucket a River deal without abstraction", |b| {
        b.iter(|| null.bucket(0, 3, deal.board(), deal.holes()))
    });
}

fn bucketing_river_suit(c: &mut criterion::Criterion) {
    let ref config = Config::holdem();
    let suit = CardAbstraction::new(CardPolicy::Suit, config).expect("suit abstraction");
    let deal = Deal::random(config, 3, &mut rand::rng());
    c.bench_function("bucket a River deal up to suit isomorphism", |b| {
        b.iter(|| suit.bucket(0, 3, deal.board(), deal.holes()))
    });
}

fn precomputing_river_suit(c: &mut criterion::Criterion) {
    let ref config = Config::holdem().seated(6);
    let suit = CardAbstraction::new(CardPolicy::Suit, config).expect("suit abstraction");
    let mut deal = Deal::random(config, 3, &mut rand::rng());
    c.bench_function("precompute every bucket of a 6-way River deal", |b| {
        b.iter(|| suit.precompute(&mut deal))
    });
}

fn precomputing_batch_parallel(c: &mut criterion::Criterion) {
    let ref config = Config::holdem().seated(6);
    let suit = CardAbstraction::new(CardPolicy::Suit, config).expect("suit abstraction");
    let ref mut rng = rand::rng();
    let mut deals = (0..4096)
        .map(|_| Deal::random(config, 3, rng))
        .collect::<Vec<_>>();
    c.bench_function("precompute 4096 River deals in parallel", |b| {
        b.iter(|| suit.precompute_all(&mut deals))
    });
}

use robopoker_abstraction::ActionAbstraction;
use robopoker_abstraction::CardAbstraction;
use robopoker_abstraction::CardPolicy;
use robopoker_abstraction::Config;
use robopoker_abstraction::Deal;
use robopoker_abstraction::Deck;
use robopoker_abstraction::Encoder;
use robopoker_abstraction::Indexer;
use robopoker_abstraction::Spot;
