mod tests {
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use myrtio_light_animator::color::Rgb;
    use myrtio_light_animator::{OutputDriver, PixelBuffer, Renderer};

    /// Records whether another thread could enter a critical section while
    /// a frame was being written
    #[derive(Default)]
    struct CriticalSectionDriver {
        writes: Vec<bool>,
    }

    impl OutputDriver for CriticalSectionDriver {
        type Error = ();

        fn write(&mut self, _colors: &[Rgb]) -> Result<(), Self::Error> {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                critical_section::with(|_| {
                    let _ = tx.send(());
                });
            });
            self.writes
                .push(rx.recv_timeout(Duration::from_secs(1)).is_ok());
            Ok(())
        }
    }

    #[test]
    fn test_write_runs_outside_critical_section() {
        let buffer: PixelBuffer<4> = PixelBuffer::new(4).unwrap();
        let renderer: Renderer<CriticalSectionDriver, 4> = Renderer::new(CriticalSectionDriver::default());

        renderer.show(&buffer).unwrap();
        renderer.show(&buffer).unwrap();

        assert_eq!(renderer.frames(), 2);
        renderer.with_output(|driver| assert_eq!(driver.writes, vec![true, true]));
    }

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        type Error = ();

        fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
            self.frames.push(colors.to_vec());
            Ok(())
        }
    }

    #[test]
    fn test_show_writes_current_strip() {
        let buffer: PixelBuffer<8> = PixelBuffer::new(3).unwrap();
        let renderer: Renderer<RecordingDriver, 8> = Renderer::new(RecordingDriver::default());

        buffer.set(1, Rgb::new(1, 2, 3)).unwrap();
        renderer.show(&buffer).unwrap();

        renderer.with_output(|driver| {
            assert_eq!(
                driver.frames,
                vec![vec![Rgb::default(), Rgb::new(1, 2, 3), Rgb::default()]]
            );
        });
    }
}
