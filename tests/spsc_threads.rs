use bytering::ring::SpscRingBuffer;

const TOTAL: usize = 256 * 1024;

#[test]
fn producer_and_consumer_on_separate_threads() {
    let mut ring = SpscRingBuffer::new(1024).unwrap();
    let (mut prod, mut cons) = ring.split();

    let received = std::thread::scope(|scope| {
        scope.spawn(move || {
            let mut sent = 0usize;
            while sent < TOTAL {
                let len = (sent % 97 + 1).min(TOTAL - sent);
                let chunk: Vec<u8> = (sent..sent + len).map(|i| i as u8).collect();
                if prod.write_into(&chunk).is_ok() {
                    sent += len;
                } else {
                    std::thread::yield_now();
                }
            }
        });

        let reader = scope.spawn(move || {
            let mut received = Vec::with_capacity(TOTAL);
            let mut buf = [0u8; 61];
            while received.len() < TOTAL {
                let n = cons.read_into(&mut buf);
                if n == 0 {
                    std::thread::yield_now();
                }
                received.extend_from_slice(&buf[..n]);
            }
            received
        });

        reader.join().unwrap()
    });

    assert_eq!(received.len(), TOTAL);
    for (i, byte) in received.iter().enumerate() {
        assert_eq!(*byte, i as u8, "byte {} out of order", i);
    }
    assert!(ring.is_empty());
}
