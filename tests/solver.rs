extern crate rps_cfr;

#[cfg(test)]
mod tests {
    use approx_eq::assert_approx_eq;
    use rps_cfr::{action::ActionId, cfr::TrainerConfig, *};

    fn assert_distribution(strt: &[f64], num_actions: usize) {
        assert_eq!(strt.len(), num_actions);
        assert!(strt.iter().all(|&prob| prob >= 0.0), "negative entry in {:?}", strt);
        let total: f64 = strt.iter().sum();
        assert!((total - 1.0).abs() < 1e-9, "{:?} sums to {}", strt, total);
    }

    #[test]
    fn self_play_rps_reaches_uniform() {
        let config = TrainerConfig::self_play(3).with_seed(42);
        let res = cfr::train(config, 200_000).unwrap();
        for strt in [&res.agent, &res.opponent].iter() {
            for prob in strt.iter() {
                assert!(
                    (prob - 1.0 / 3.0).abs() < 0.02,
                    "expected uniform play, got {:?}",
                    strt
                );
            }
        }
        let rule = rule::from_name("rps").unwrap();
        assert!(solver::calc_exploitability(&rule.dominance, &res.profile()) < 0.05);
    }

    #[test]
    fn self_play_rpsls_reaches_uniform() {
        let res = cfr::train(TrainerConfig::self_play(5).with_seed(7), 200_000).unwrap();
        for prob in res.agent.iter() {
            assert!(
                (prob - 0.2).abs() < 0.02,
                "expected uniform play, got {:?}",
                res.agent
            );
        }
    }

    #[test]
    fn calc_nash_strt_is_nearly_unexploitable() {
        let rel = rule::DominanceRelation::new(3).unwrap();
        let uniform = profile::uniform(3);
        let skewed = profile::from_strt(
            &player::Player::P1,
            vec![0.4, 0.3, 0.3],
            &player::Player::P2,
            vec![0.4, 0.3, 0.3],
        )
        .unwrap();
        let nash = cfr::calc_nash_strt(3, 100_000, 3).unwrap();
        assert!(solver::calc_exploitability(&rel, &uniform).abs() < 1e-12);
        assert!(
            solver::calc_exploitability(&rel, &skewed)
                > solver::calc_exploitability(&rel, &nash)
        );
    }

    #[test]
    fn fixed_rock_opponent_is_beaten_by_paper() {
        let config = TrainerConfig::fixed(3, vec![1.0, 0.0, 0.0]).with_seed(1);
        let res = cfr::train(config, 20_000).unwrap();
        assert!(res.agent[1] > 0.99, "expected paper, got {:?}", res.agent);
        assert_eq!(res.opponent, vec![1.0, 0.0, 0.0]);
        assert_approx_eq!(
            solver::calc_ev(&rule::DominanceRelation::new(3).unwrap(), &res.agent, &res.opponent),
            res.agent[1] - res.agent[2]
        );
    }

    #[test]
    fn fixed_rock_opponent_in_rpsls() {
        let rule = rule::from_name("rpsls").unwrap();
        let rock = strategy::pure(5, ActionId::new(0));
        let config = TrainerConfig::fixed(5, rock).with_seed(2);
        let res = cfr::train(config, 20_000).unwrap();
        let winning: f64 = rule
            .actions
            .ids()
            .filter(|&a| rule.dominance.beats(a, ActionId::new(0)))
            .map(|a| res.agent[a.index()])
            .sum();
        assert!(winning > 0.99, "expected Spock or Paper, got {:?}", res.agent);
    }

    #[test]
    fn skewed_opponent_is_exploited() {
        let rel = rule::DominanceRelation::new(3).unwrap();
        let opp = vec![0.4, 0.3, 0.3];
        let config = TrainerConfig::fixed(3, opp.clone()).with_seed(4);
        let res = cfr::train(config, 100_000).unwrap();
        assert_eq!(solver::best_resp_action(&rel, &opp), ActionId::new(1));
        assert!(res.agent[1] > 0.6, "expected mostly paper, got {:?}", res.agent);
        assert!(solver::calc_ev(&rel, &res.agent, &opp) > 0.0);
    }

    #[test]
    fn every_strategy_is_a_distribution() {
        for n in [3, 5, 7].iter() {
            for iterations in [0, 1, 2, 17, 1_000].iter() {
                let config = TrainerConfig::self_play(*n)
                    .with_seed(*iterations as u64)
                    .with_snapshot_stride(1);
                let mut trainer = cfr::Trainer::new(config).unwrap();
                for _ in 0..*iterations {
                    assert_distribution(&trainer.agent().regret_matching_strategy(), *n);
                    trainer.step();
                }
                let res = trainer.result();
                assert_distribution(&res.agent, *n);
                assert_distribution(&res.opponent, *n);
                for snapshot in res.history.snapshots.iter() {
                    assert_distribution(&snapshot.agent, *n);
                    assert_distribution(&snapshot.opponent, *n);
                }

                let fixed = TrainerConfig::fixed(*n, strategy::uniform(*n)).with_seed(3);
                assert_distribution(&cfr::train(fixed, *iterations).unwrap().agent, *n);
            }
        }
    }

    #[test]
    fn same_seed_same_actions() {
        let config = TrainerConfig::self_play(5).with_seed(2024);
        let mut a = cfr::Trainer::new(config.clone()).unwrap();
        let mut b = cfr::Trainer::new(config).unwrap();
        for _ in 0..5_000 {
            assert_eq!(a.step(), b.step());
        }
        assert_eq!(a.result(), b.result());

        let fixed = TrainerConfig::fixed(3, vec![0.4, 0.3, 0.3])
            .with_seed(99)
            .with_snapshot_stride(250);
        let res1 = cfr::train(fixed.clone(), 5_000).unwrap();
        let res2 = cfr::train(fixed, 5_000).unwrap();
        assert_eq!(res1, res2);
        assert_eq!(res1.history.len(), 20);
    }

    #[test]
    fn trainers_share_no_state() {
        let config = TrainerConfig::self_play(3).with_seed(8);
        let mut first = cfr::Trainer::new(config.clone()).unwrap();
        let mut other = cfr::Trainer::new(TrainerConfig::self_play(3).with_seed(9)).unwrap();
        let mut second = cfr::Trainer::new(config).unwrap();

        for _ in 0..1_000 {
            first.step();
            other.step();
            other.step();
        }
        let first_res = first.run(1_000);
        other.run(500);
        let second_res = second.run(2_000);
        assert_eq!(first_res, second_res);
    }

    #[test]
    fn different_seeds_diverge() {
        let res1 = cfr::train(TrainerConfig::self_play(3).with_seed(1), 1_000).unwrap();
        let res2 = cfr::train(TrainerConfig::self_play(3).with_seed(2), 1_000).unwrap();
        assert_ne!(res1.agent_strategy_sum, res2.agent_strategy_sum);
    }

    #[test]
    fn invalid_configuration_is_reported_before_training() {
        let cases = vec![
            TrainerConfig::self_play(2),
            TrainerConfig::self_play(6),
            TrainerConfig::fixed(5, vec![0.4, 0.3, 0.3]),
            TrainerConfig::fixed(3, vec![0.7, 0.7, -0.4]),
            TrainerConfig::fixed(3, vec![0.3, 0.3, 0.3]),
        ];
        for config in cases {
            match cfr::Trainer::new(config) {
                Err(Error::InvalidConfiguration(_)) => {}
                Err(e) => panic!("unexpected error: {}", e),
                Ok(_) => panic!("configuration should have been rejected"),
            }
        }
        // within tolerance
        assert!(cfr::Trainer::new(TrainerConfig::fixed(3, vec![0.5, 0.25, 0.2500000001])).is_ok());
    }

    #[test]
    fn history_tracks_the_average() {
        let config = TrainerConfig::fixed(3, vec![1.0, 0.0, 0.0])
            .with_seed(6)
            .with_snapshot_stride(100);
        let res = cfr::train(config, 10_000).unwrap();
        let paper = res.history.series(ActionId::new(1));
        assert_eq!(paper.len(), 100);
        assert_eq!(paper.last().map(|(t, _)| *t), Some(10_000));
        assert_eq!(paper.last().map(|(_, prob)| *prob), Some(res.agent[1]));
        assert!(paper.first().unwrap().1 < paper.last().unwrap().1);
    }
}
