// Play whole games with random clicks and check the rules after every move.
mod random_games {
  use proptest::prelude::ProptestConfig;
  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};
  use std::collections::BTreeSet;
  use test_strategy::proptest;
  use trigame::algorithms::{edge_crossings, first_legal_edge};
  use trigame::data::*;
  use trigame::game::*;
  use trigame::*;

  fn check_board(session: &Session) {
    let board = session.board();
    let points = board.points();
    let edges = board.edges();

    let keys: BTreeSet<IndexEdge> = edges.iter().map(Edge::key).collect();
    assert_eq!(keys.len(), edges.len(), "duplicate edge");
    assert!(edges.iter().all(|e| e.src != e.dst), "loop edge");
    assert!(edge_crossings(points, edges).next().is_none(), "crossing edges");

    for triangle in board.triangles() {
      let [a, b, c] = triangle.corners;
      for (p, q) in [(a, b), (b, c), (c, a)] {
        assert!(keys.contains(&IndexEdge::new(p, q)), "triangle without edge");
      }
      let view = triangle.view(points);
      for (idx, pt) in points.iter().enumerate() {
        if !triangle.has_corner(PointId(idx)) {
          assert!(!view.contains(pt), "point {idx} inside {triangle:?}");
        }
      }
    }
    let keys: BTreeSet<[PointId; 3]> = board.triangles().iter().map(Triangle::key).collect();
    assert_eq!(keys.len(), board.triangles().len(), "triangle scored twice");

    let total: usize = session.scoreboard().scores().iter().sum();
    assert_eq!(total, board.triangles().len());

    assert_eq!(
      session.is_game_over(),
      first_legal_edge(points, edges).is_none()
    );
  }

  fn play(seed: u64, num_players: usize, num_points: usize) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(GameConfig::default(), &mut rng).unwrap();
    session.set_player_count(num_players, &mut rng).unwrap();
    session.set_point_count(num_points, &mut rng).unwrap();
    let n = session.board().points().len();
    check_board(&session);

    let mut use_hint = false;
    while !session.is_game_over() {
      let (a, b) = if use_hint {
        let hint = session.board().first_legal_edge().unwrap();
        (hint.min, hint.max)
      } else {
        (PointId(rng.gen_range(0..n)), PointId(rng.gen_range(0..n)))
      };
      if a == b {
        continue;
      }
      let edges_before = session.board().edges().len();
      let triangles_before = session.board().triangles().len();
      let player = session.active_player();
      let score_before = session.scoreboard().score(player);

      assert_eq!(session.select_point(a).unwrap(), Selection::Pending(a));
      match session.select_point(b) {
        Ok(Selection::Drawn { edge, triangles }) => {
          use_hint = false;
          assert_eq!(edge, Edge::new(a, b, player));
          assert_eq!(session.board().edges().len(), edges_before + 1);
          assert_eq!(
            session.board().triangles().len(),
            triangles_before + triangles.len()
          );
          if triangles.is_empty() {
            assert_eq!(session.active_player(), player.next(num_players));
          } else {
            assert_eq!(session.active_player(), player);
            assert_eq!(
              session.scoreboard().score(player),
              score_before + triangles.len()
            );
          }
        }
        Err(err) => {
          use_hint = true;
          assert!(err.is_rejected_move());
          assert_eq!(session.last_rejection(), Some(err));
          assert_eq!(session.board().edges().len(), edges_before);
          assert_eq!(session.active_player(), player);
        }
        Ok(other) => panic!("unexpected {other:?}"),
      }
      assert_eq!(session.pending(), None);
      check_board(&session);
    }

    // Nothing moves once the game is over.
    let edges = session.board().edges().to_vec();
    let scores = session.scoreboard().scores().to_vec();
    for idx in 0..n {
      assert_eq!(session.select_point(PointId(idx)).unwrap(), Selection::Ignored);
    }
    assert_eq!(session.board().edges(), &edges[..]);
    assert_eq!(session.scoreboard().scores(), &scores[..]);

    let outcome = session.outcome().unwrap();
    let best = scores.iter().copied().max().unwrap();
    match outcome {
      Outcome::Winner(p) => assert_eq!(scores.iter().filter(|&&s| s == best).count(), 1, "{p:?}"),
      Outcome::TieAll => assert!(scores.iter().all(|&s| s == best)),
      Outcome::Tie(players) => {
        assert!(players.len() > 1 && players.len() < num_players);
        assert!(players.iter().all(|p| scores[p.usize()] == best));
      }
    }
  }

  #[test]
  fn default_game() {
    play(0, 2, 10);
  }

  #[test]
  fn crowded_game() {
    play(1, 4, 30);
  }

  #[proptest(ProptestConfig { cases: 32, ..ProptestConfig::default() })]
  fn rules_hold(
    #[strategy(0u64..u64::MAX)] seed: u64,
    #[strategy(2usize..=4)] num_players: usize,
    #[strategy(2usize..=16)] num_points: usize,
  ) {
    play(seed, num_players, num_points);
  }

  #[test]
  fn same_seed_same_game() {
    let mut a = Session::new(GameConfig::default(), &mut SmallRng::seed_from_u64(77)).unwrap();
    let mut b = Session::new(GameConfig::default(), &mut SmallRng::seed_from_u64(77)).unwrap();
    assert_eq!(a.board().points(), b.board().points());
    for (x, y) in [(0, 1), (1, 2), (2, 0), (3, 4)] {
      let _ = a.select_point(PointId(x)).and_then(|_| a.select_point(PointId(y)));
      let _ = b.select_point(PointId(x)).and_then(|_| b.select_point(PointId(y)));
    }
    assert_eq!(a.board().edges(), b.board().edges());
    assert_eq!(a.board().triangles(), b.board().triangles());
    assert_eq!(a.scoreboard(), b.scoreboard());
  }
}
