mod common;

mod tests {
    use embassy_futures::block_on;
    use myrtio_light_animator::animation::{
        AlternateAnimation, FadeAnimation, MultiPixelRunAnimation, PixelRunAnimation,
        SmoothChaseAnimation, SparkleAnimation, WipeAnimation,
    };
    use myrtio_light_animator::color::{BLACK, ColorChannel, Palette, Rgb};
    use myrtio_light_animator::{
        AnimationEngine, AnimationEngineConfig, AnimationError, AnimationSlot, ConfigError,
        Direction, Duration,
    };

    use crate::common::{MockDriver, MockError, engine, engine_with, frames, paint_distinct, pixels};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const NO_DELAY: Duration = Duration::from_ticks(0);

    fn run<const N: usize>(
        engine: &AnimationEngine<MockDriver, N>,
        animation: impl Into<AnimationSlot>,
    ) -> Result<(), AnimationError<MockError>> {
        block_on(engine.run(&animation.into()))
    }

    /// Indices whose color changed between two frames
    fn changed(before: &[Rgb], after: &[Rgb]) -> Vec<usize> {
        (0..after.len()).filter(|&i| before[i] != after[i]).collect()
    }

    #[test]
    fn test_engine_rejects_oversized_strip() {
        let config = AnimationEngineConfig::new(9);
        let result = AnimationEngine::<MockDriver, 8>::new(MockDriver::default(), &config);
        assert!(matches!(
            result,
            Err(ConfigError::CapacityExceeded {
                requested: 9,
                capacity: 8
            })
        ));
    }

    #[test]
    fn test_immediate_operations() {
        let engine = engine::<8>(4);
        engine.set_pixel_color(2, Rgb::new(0x12, 0x34, 0x56)).unwrap();
        assert_eq!(engine.pixel_color_u32(2), Ok(0x12_34_56));
        assert!(frames(&engine).is_empty());

        engine.set_strip_color(RED).unwrap();
        assert_eq!(frames(&engine), vec![vec![RED; 4]]);

        engine.set_section_color(1, 2, BLUE).unwrap();
        assert_eq!(frames(&engine)[1], vec![RED, BLUE, BLUE, RED]);
        assert_eq!(engine.renderer().frames(), 2);

        assert_eq!(
            engine.set_section_color(3, 1, WHITE),
            Err(AnimationError::Config(ConfigError::InvalidRange { start: 3, end: 1 }))
        );
        assert_eq!(
            engine.pixel_color(4),
            Err(ConfigError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(frames(&engine).len(), 2);
    }

    #[test]
    fn test_set_strip_gradient() {
        let engine = engine::<8>(5);
        engine.set_strip_gradient(&[BLACK, WHITE]).unwrap();
        assert_eq!(engine.pixel_color(0), Ok(BLACK));
        assert_eq!(engine.pixel_color(2), Ok(Rgb::new(128, 128, 128)));
        assert_eq!(engine.pixel_color(4), Ok(WHITE));
        assert_eq!(
            engine.set_strip_gradient(&[]),
            Err(ConfigError::EmptyColorList)
        );
        assert!(frames(&engine).is_empty());
    }

    #[test]
    fn test_set_strip_from_palette() {
        let engine = engine::<8>(3);
        let mut palette: Palette<4> = Palette::new();
        palette.insert(0, RED).unwrap();
        palette.insert(1, BLUE).unwrap();

        engine.set_strip_from_palette(&palette, 2);
        assert_eq!(pixels(&engine), vec![BLUE, BLACK, RED]);
        assert!(frames(&engine).is_empty());
    }

    #[test]
    fn test_fade_with_revert() {
        let engine = engine::<8>(3);
        let original = Rgb::new(5, 15, 25);
        engine.set_pixel_color(1, original).unwrap();

        block_on(engine.fade_pixel(1, ColorChannel::Red, 10, 20, true)).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 12);
        for (step, frame) in frames[..11].iter().enumerate() {
            assert_eq!(frame[1], Rgb::new(10 + step as u8, 15, 25));
        }
        assert_eq!(frames[11][1], original);
        assert_eq!(engine.pixel_color(1), Ok(original));
    }

    #[test]
    fn test_fade_down_without_revert() {
        let engine = engine::<8>(2);
        let fade = FadeAnimation::new(0, ColorChannel::Blue, 20, 10, false).with_delay(NO_DELAY);
        run(&engine, fade).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0][0], Rgb::new(0, 0, 20));
        assert_eq!(engine.pixel_color(0), Ok(Rgb::new(0, 0, 10)));
    }

    #[test]
    fn test_fade_edge_cases() {
        let engine = engine::<8>(2);
        run(&engine, FadeAnimation::new(0, ColorChannel::Green, 7, 7, true)).unwrap();
        assert!(frames(&engine).is_empty());

        let result = run(&engine, FadeAnimation::new(2, ColorChannel::Green, 0, 9, true));
        assert_eq!(
            result,
            Err(AnimationError::Config(ConfigError::IndexOutOfRange {
                index: 2,
                len: 2
            }))
        );
        assert!(frames(&engine).is_empty());

        let empty = crate::common::engine::<8>(0);
        assert_eq!(
            block_on(empty.fade_pixel(0, ColorChannel::Red, 0, 9, false)),
            Err(AnimationError::Config(ConfigError::IndexOutOfRange {
                index: 0,
                len: 0
            }))
        );
        assert!(frames(&empty).is_empty());
    }

    #[test]
    fn test_wipe_forward() {
        let engine = engine::<8>(4);
        run(&engine, WipeAnimation::new(RED, Direction::Forward).with_delay(NO_DELAY)).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 4);
        for (step, frame) in frames.iter().enumerate() {
            for (index, color) in frame.iter().enumerate() {
                let expected = if index <= step { RED } else { BLACK };
                assert_eq!(*color, expected);
            }
        }
    }

    #[test]
    fn test_wipe_backward_section() {
        let engine = engine::<8>(6);
        let wipe = WipeAnimation::new(BLUE, Direction::Backward)
            .with_section(1, 3)
            .with_delay(NO_DELAY);
        run(&engine, wipe).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 3);
        assert_eq!(changed(&[BLACK; 6], &frames[0]), vec![3]);
        assert_eq!(changed(&frames[0], &frames[1]), vec![2]);
        assert_eq!(changed(&frames[1], &frames[2]), vec![1]);
        assert_eq!(pixels(&engine), vec![BLACK, BLUE, BLUE, BLUE, BLACK, BLACK]);
    }

    #[test]
    fn test_wipe_invalid_section() {
        let engine = engine::<8>(6);
        let result = run(&engine, WipeAnimation::new(BLUE, Direction::Forward).with_section(4, 2));
        assert_eq!(
            result,
            Err(AnimationError::Config(ConfigError::InvalidRange { start: 4, end: 2 }))
        );
        assert!(frames(&engine).is_empty());
    }

    #[test]
    fn test_zero_length_strip_is_a_no_op() {
        let engine = engine::<8>(0);
        block_on(engine.wipe(RED, Direction::Forward)).unwrap();
        block_on(engine.alternate(RED, BLUE, NO_DELAY)).unwrap();
        block_on(engine.pixel_run(Direction::Forward, RED, BLACK)).unwrap();
        block_on(engine.pixel_run_with_trail(Direction::Backward, RED, BLACK)).unwrap();
        block_on(engine.sparkle(RED)).unwrap();
        block_on(engine.sparkle_to_color(RED)).unwrap();
        block_on(engine.multi_pixel_run(3, Direction::Forward, RED, BLACK)).unwrap();
        block_on(engine.smooth_chase(&[RED, BLUE], Direction::Forward)).unwrap();
        assert!(frames(&engine).is_empty());
    }

    #[test]
    fn test_alternate() {
        let engine = engine::<8>(3);
        block_on(engine.alternate(RED, BLUE, NO_DELAY)).unwrap();
        assert_eq!(frames(&engine), vec![vec![RED; 3], vec![BLUE; 3]]);
    }

    #[test]
    fn test_pixel_run() {
        let engine = engine::<8>(3);
        let background = Rgb::new(1, 1, 1);
        let animation = PixelRunAnimation::new(Direction::Forward, RED)
            .with_background(background)
            .with_delay(NO_DELAY);
        run(&engine, animation).unwrap();

        let b = background;
        assert_eq!(
            frames(&engine),
            vec![
                vec![b, b, b],
                vec![RED, b, b],
                vec![b, RED, b],
                vec![b, b, RED],
            ]
        );
        assert_eq!(pixels(&engine), vec![b; 3]);
    }

    #[test]
    fn test_pixel_run_with_trail() {
        let engine = engine::<8>(3);
        let animation = PixelRunAnimation::new(Direction::Forward, RED)
            .with_trail()
            .with_delay(NO_DELAY);
        run(&engine, animation).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0], vec![RED, BLACK, BLACK]);
        assert_eq!(frames[1], vec![Rgb::new(153, 0, 0), RED, BLACK]);
        assert_eq!(
            frames[2],
            vec![Rgb::new(92, 0, 0), Rgb::new(153, 0, 0), RED]
        );
    }

    #[test]
    fn test_sparkle_to_color_visits_every_pixel_once() {
        let engine = engine::<8>(3);
        run(&engine, SparkleAnimation::to_color(WHITE).with_delay(NO_DELAY)).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 3);

        let mut visited = Vec::new();
        let mut previous = vec![BLACK; 3];
        for frame in &frames {
            let diff = changed(&previous, frame);
            assert_eq!(diff.len(), 1);
            assert_eq!(frame[diff[0]], WHITE);
            visited.push(diff[0]);
            previous.clone_from(frame);
        }
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2]);
        assert_eq!(pixels(&engine), vec![WHITE; 3]);
    }

    #[test]
    fn test_sparkle_restores_pixels() {
        let engine = engine::<8>(6);
        let original = paint_distinct(&engine);
        run(&engine, SparkleAnimation::new(WHITE).with_delay(NO_DELAY)).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 6);

        let mut visited = Vec::new();
        for frame in &frames {
            let lit = changed(&original, frame);
            assert_eq!(lit.len(), 1);
            assert_eq!(frame[lit[0]], WHITE);
            visited.push(lit[0]);
        }
        visited.sort_unstable();
        assert_eq!(visited, (0..6).collect::<Vec<_>>());
        assert_eq!(pixels(&engine), original);
    }

    #[test]
    fn test_multi_pixel_run_phases() {
        let engine = engine::<8>(7);
        let animation = MultiPixelRunAnimation::new(3, Direction::Forward, RED, BLACK)
            .with_delay(NO_DELAY);
        run(&engine, animation).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 3);
        let lit = |frame: &Vec<Rgb>| changed(&[BLACK; 7], frame);
        assert_eq!(lit(&frames[0]), vec![0, 3, 6]);
        assert_eq!(lit(&frames[1]), vec![1, 4]);
        assert_eq!(lit(&frames[2]), vec![2, 5]);
        assert_eq!(pixels(&engine), vec![BLACK; 7]);
    }

    #[test]
    fn test_multi_pixel_run_backward_to_color() {
        let engine = engine::<8>(5);
        let animation =
            MultiPixelRunAnimation::to_color(2, Direction::Backward, BLUE).with_delay(NO_DELAY);
        run(&engine, animation).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 2);
        assert_eq!(changed(&[BLACK; 5], &frames[0]), vec![1, 3]);
        assert_eq!(frames[1], vec![BLUE; 5]);
    }

    #[test]
    fn test_multi_pixel_run_zero_spacing() {
        let engine = engine::<8>(5);
        let result = block_on(engine.multi_pixel_run_to_color(0, Direction::Forward, BLUE));
        assert_eq!(result, Err(AnimationError::Config(ConfigError::ZeroSpacing)));
        assert!(frames(&engine).is_empty());
    }

    #[test]
    fn test_smooth_chase_rotates_gradient() {
        let engine = engine::<8>(4);
        let animation = SmoothChaseAnimation::new(&[RED, BLUE], Direction::Forward)
            .unwrap()
            .with_delay(NO_DELAY);
        run(&engine, animation).unwrap();

        let frames = frames(&engine);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0][0], RED);
        assert_eq!(frames[0][3], BLUE);
        for (offset, frame) in frames.iter().enumerate() {
            for index in 0..4 {
                assert_eq!(frame[(index + offset) % 4], frames[0][index]);
            }
        }
    }

    #[test]
    fn test_smooth_chase_stop_validation() {
        assert_eq!(
            SmoothChaseAnimation::new(&[], Direction::Forward).err(),
            Some(ConfigError::EmptyColorList)
        );
        assert!(matches!(
            SmoothChaseAnimation::new(&[RED; 17], Direction::Forward),
            Err(ConfigError::CapacityExceeded { requested: 17, .. })
        ));
    }

    #[test]
    fn test_output_error_stops_animation() {
        let engine = engine_with::<8>(MockDriver::failing_from(1), 4);
        let result = run(&engine, WipeAnimation::new(RED, Direction::Forward).with_delay(NO_DELAY));
        assert_eq!(result, Err(AnimationError::Output(MockError)));
        assert_eq!(frames(&engine).len(), 1);
        assert_eq!(pixels(&engine), vec![RED, RED, BLACK, BLACK]);
    }

    #[test]
    fn test_sparkle_restores_pixel_when_output_fails() {
        let engine = engine_with::<8>(MockDriver::failing_from(1), 4);
        let original = paint_distinct(&engine);

        let result = run(&engine, SparkleAnimation::new(WHITE).with_delay(NO_DELAY));

        assert_eq!(result, Err(AnimationError::Output(MockError)));
        assert_eq!(frames(&engine).len(), 1);
        assert_eq!(pixels(&engine), original);
    }

    #[test]
    fn test_sparkle_to_color_keeps_color_when_output_fails() {
        let engine = engine_with::<8>(MockDriver::failing_from(1), 4);
        paint_distinct(&engine);

        let result = run(&engine, SparkleAnimation::to_color(WHITE).with_delay(NO_DELAY));

        assert_eq!(result, Err(AnimationError::Output(MockError)));
        let lit = pixels(&engine).iter().filter(|&&c| c == WHITE).count();
        assert_eq!(lit, 2);
    }

    #[test]
    fn test_slot_ids() {
        let slot: AnimationSlot = AlternateAnimation::new(RED, BLUE, NO_DELAY).into();
        assert_eq!(slot.id().as_str(), "alternate");
        let slot: AnimationSlot = PixelRunAnimation::new(Direction::Forward, RED)
            .with_trail()
            .into();
        assert_eq!(slot.id().as_str(), "pixel_run_with_trail");
        let slot: AnimationSlot = SparkleAnimation::to_color(RED).into();
        assert_eq!(slot.id().as_str(), "sparkle_to_color");
    }
}
