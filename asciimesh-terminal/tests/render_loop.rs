use asciimesh_core::shading::{BLANK, SHADE_RAMP};
use asciimesh_core::{obj, Camera, Mesh, MeshError, Scene, Vertex, Viewport};
use asciimesh_terminal::{App, AsciiRenderer, CancellationToken, RenderConfig, TextSink};

#[test]
fn test_unit_cube_silhouette() {
    // Camera pushed back by the cube's diagonal, no rotation
    let camera = Camera::new(Vertex::origin(), 3.0f32.sqrt());
    let scene = Scene::with_camera(Mesh::cube(1.0), camera).unwrap();
    let mut renderer = AsciiRenderer::new(Viewport::new(10, 10));

    renderer.render(&scene);
    let frame = renderer.frame();

    assert!(frame.covered_cells() > 0);
    assert!(frame.chars().iter().any(|c| SHADE_RAMP.contains(c)));
    assert!(frame.chars().iter().all(|c| *c == BLANK || SHADE_RAMP.contains(c)));
    // The silhouette stays inside the grid's middle; the border is empty
    assert_eq!(frame.get(0, 0), Some(BLANK));
    assert_eq!(frame.get(9, 9), Some(BLANK));
}

#[test]
fn test_loaded_mesh_renders_exact_frame_count() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.obj");
    obj::save_obj(&Mesh::cube(2.0), &path).unwrap();

    let mesh = obj::load_obj(&path).unwrap();
    let config = RenderConfig {
        yaw_step: 0.25,
        max_frames: Some(8),
        ..RenderConfig::default()
    };
    let mut app = App::new(Scene::new(mesh).unwrap(), Viewport::new(40, 20), config);
    let mut sink = TextSink::new(Vec::new());

    assert_eq!(app.run(&mut sink, &CancellationToken::new()).unwrap(), 8);
    let text = String::from_utf8(sink.into_inner()).unwrap();
    let frames: Vec<&str> = text.split("\n\n").filter(|f| !f.is_empty()).collect();
    assert_eq!(frames.len(), 8);
    for frame in frames {
        assert_eq!(frame.lines().count(), 20);
        assert!(frame.lines().all(|l| l.chars().count() == 40));
        assert!(frame.chars().any(|c| SHADE_RAMP.contains(&c)));
    }
}

#[test]
fn test_out_of_range_face_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.obj");
    std::fs::write(&path, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nf 2 3 42\n").unwrap();

    match obj::load_obj(&path) {
        Err(MeshError::FaceReferenceOutOfRange { line, index, vertex_count }) => {
            assert_eq!(line, 5);
            assert_eq!(index, 42);
            assert_eq!(vertex_count, 3);
        }
        other => panic!("expected out-of-range error, got {:?}", other),
    }
}

#[test]
fn test_round_trip_through_disk() {
    let text = "v 0.5 -1.25 3\nv 2 2 2\nv -0.125 0 1\nv 9 8 7\nf 1/1 2/2 3/3\nf 4 3 2\n";
    let first = obj::parse_obj(text).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("again.obj");
    obj::save_obj(&first, &path).unwrap();
    let second = obj::load_obj(&path).unwrap();

    assert_eq!(first.faces(), second.faces());
    assert_eq!(first.vertices(), second.vertices());
}

#[test]
fn test_headless_output_without_rotation_is_stable() {
    let config = RenderConfig {
        yaw_step: 0.0,
        max_frames: Some(2),
        ..RenderConfig::default()
    };
    let mut app = App::new(Scene::new(Mesh::cube(1.0)).unwrap(), Viewport::new(16, 8), config);
    let mut sink = TextSink::new(Vec::new());
    app.run(&mut sink, &CancellationToken::new()).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let frames: Vec<&str> = text.split("\n\n").filter(|f| !f.is_empty()).collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], frames[1]);
}
