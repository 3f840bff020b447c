use std::collections::HashSet;

use harpoon::transport::in_memory::InMemoryLineTransport;
use harpoon::transport::LineTransport;
use harpoon::{
    serve_session, Coord, GameSession, MemoryPatternStore, SessionState, TcpLineTransport,
    BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::net::TcpListener;

#[tokio::test]
async fn serves_targets_over_in_memory_transport() -> anyhow::Result<()> {
    let (mut server_side, mut client) = InMemoryLineTransport::pair();

    let server = tokio::spawn(async move {
        let mut session = GameSession::new(BOARD_SIZE, Box::new(MemoryPatternStore::new())).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        serve_session(&mut session, &mut server_side, &mut rng)
            .await
            .unwrap();
        session.state()
    });

    // Opening prompt carries no coordinates.
    client.send_line("miss").await?;
    let first = client.recv_line().await?.expect("first target");
    assert!(Coord::from_label(&first, BOARD_SIZE).is_ok());

    client.send_line(&format!("miss;{}", first.trim())).await?;
    let second = client.recv_line().await?.expect("second target");
    assert_ne!(first.trim(), second.trim());

    client.send_line(&format!("hit;{}", second.trim())).await?;
    let third = client.recv_line().await?.expect("third target");

    client
        .send_line(&format!("last ship sunk;{}", third.trim()))
        .await?;
    // Game over: the server closes without another target.
    assert_eq!(client.recv_line().await?, None);
    assert_eq!(server.await?, SessionState::Finished);
    Ok(())
}

#[tokio::test]
async fn malformed_line_gets_diagnostic_and_close() -> anyhow::Result<()> {
    let (mut server_side, mut client) = InMemoryLineTransport::pair();

    let server = tokio::spawn(async move {
        let mut session = GameSession::new(BOARD_SIZE, Box::new(MemoryPatternStore::new())).unwrap();
        let mut rng = SmallRng::seed_from_u64(3);
        serve_session(&mut session, &mut server_side, &mut rng).await
    });

    client.send_line("kaboom;Z99").await?;
    let reply = client.recv_line().await?.expect("diagnostic line");
    assert!(reply.starts_with("error:"), "got {:?}", reply);
    assert_eq!(client.recv_line().await?, None);

    server.await??;
    Ok(())
}

/// Fixed fleet layout for the loopback game: horizontal ships on even rows.
fn fixed_fleet() -> Vec<HashSet<Coord>> {
    let lengths = [5usize, 4, 3, 3, 2];
    lengths
        .iter()
        .enumerate()
        .map(|(i, &len)| (0..len).map(|k| Coord::new(i * 2, k)).collect())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn full_game_over_tcp_loopback() -> anyhow::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let mut transport = TcpLineTransport::new(socket);
        let mut session = GameSession::new(BOARD_SIZE, Box::new(MemoryPatternStore::new())).unwrap();
        let mut rng = SmallRng::seed_from_u64(11);
        serve_session(&mut session, &mut transport, &mut rng)
            .await
            .unwrap();
        session.state()
    });

    let client = tokio::spawn(async move {
        let mut transport = TcpLineTransport::connect(addr).await.unwrap();
        let mut ships = fixed_fleet();
        let mut shots = 0usize;

        transport.send_line("miss").await.unwrap();
        while let Some(line) = transport.recv_line().await.unwrap() {
            let target = Coord::from_label(line.trim(), BOARD_SIZE).unwrap();
            shots += 1;
            assert!(shots <= 100, "engine failed to finish the hunt");

            let result = match ships.iter().position(|s| s.contains(&target)) {
                None => "miss".to_string(),
                Some(i) => {
                    ships[i].remove(&target);
                    if !ships[i].is_empty() {
                        "hit".to_string()
                    } else if ships.iter().all(|s| s.is_empty()) {
                        "last ship sunk".to_string()
                    } else {
                        "hit and sunk".to_string()
                    }
                }
            };
            transport
                .send_line(&format!("{};{}", result, target.to_label()))
                .await
                .unwrap();
            if ships.iter().all(|s| s.is_empty()) {
                break;
            }
        }
        assert!(ships.iter().all(|s| s.is_empty()));
        shots
    });

    let (server_state, shots) = tokio::try_join!(server, client)?;
    assert_eq!(server_state, SessionState::Finished);
    // 17 ship cells on a 100-cell board; anything close to exhaustive
    // scanning would indicate the probability map is not steering shots.
    assert!(shots >= 17 && shots < 100, "took {} shots", shots);
    Ok(())
}
