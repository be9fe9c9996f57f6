//! Interactive 3D view of the cube using kiss3d.

use std::sync::Arc;

use kiss3d::prelude::*;
use rustc_hash::FxHashMap;

use rubik::notation::Move;
use rubik::{Clock, Coord, Cube, CubieMap, Face, FaceColor, ViewAngles};

/// Edge length of a cubie body (slightly under 1.0 for visible gaps).
const CUBIE_SIZE: f32 = 0.95;
/// Edge length of a sticker.
const STICKER_SIZE: f32 = 0.82;
/// Thickness of a sticker along its face normal.
const STICKER_DEPTH: f32 = 0.02;

fn color(face_color: FaceColor) -> Color {
    let [r, g, b] = face_color.rgb();
    Color::new(r, g, b, 1.0)
}

fn to_kiss_quat(q: glam::Quat) -> Quat {
    Quat::from_xyzw(q.x, q.y, q.z, q.w)
}

fn to_kiss_vec(v: glam::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

/// Scene nodes for one cubie: a group carrying a dark body and six stickers.
struct RenderedCubie {
    node: SceneNode3d,
    /// Indexed by `Face::index`.
    stickers: Vec<SceneNode3d>,
}

/// Builds one group per cubie under `root`, keyed by home slot.
///
/// Stickers sit on the group's world-aligned faces; colors are filled in by
/// `sync_scene` every time the cube publishes a new state.
fn build_scene(root: &mut SceneNode3d, cubies: &CubieMap) -> FxHashMap<Coord, RenderedCubie> {
    let offset = CUBIE_SIZE / 2.0;

    cubies
        .keys()
        .map(|&home| {
            let mut node = root.add_group();
            node.add_cube(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE)
                .set_color(color(FaceColor::Inner));

            let stickers = Face::ALL
                .iter()
                .map(|face| {
                    let (nx, ny, nz) = face.normal();
                    let extent = |n: i32| {
                        if n == 0 {
                            STICKER_SIZE
                        } else {
                            STICKER_DEPTH
                        }
                    };
                    node.add_cube(extent(nx), extent(ny), extent(nz))
                        .set_position(Vec3::new(
                            nx as f32 * offset,
                            ny as f32 * offset,
                            nz as f32 * offset,
                        ))
                })
                .collect();

            (home, RenderedCubie { node, stickers })
        })
        .collect()
}

/// Moves every cubie node to match `cubies`.
///
/// A cubie mid-move is drawn at its new slot rotated back by whatever part
/// of the quarter turn has not played yet, so the slice swings about the
/// cube center.
fn sync_scene(rendered: &mut FxHashMap<Coord, RenderedCubie>, cubies: &CubieMap) {
    for cubie in cubies.values() {
        let Some(nodes) = rendered.get_mut(&cubie.home) else {
            continue;
        };
        let (x, y, z) = cubie.position;
        let residual = cubie.residual_rotation();
        let position = residual * glam::Vec3::new(x as f32, y as f32, z as f32);

        nodes.node.set_position(to_kiss_vec(position));
        nodes.node.set_rotation(to_kiss_quat(residual));
        for face in Face::ALL {
            nodes.stickers[face.index()].set_color(color(cubie.face_colors[face.index()]));
        }
    }
}

fn view_rotation(view: ViewAngles) -> Quat {
    to_kiss_quat(glam::Quat::from_euler(
        glam::EulerRot::XYZ,
        view.rotation_x,
        view.rotation_y,
        0.0,
    ))
}

/// Maps a letter key to the slice it turns.
fn slice_for_key(key: kiss3d::event::Key) -> Option<Move> {
    use kiss3d::event::Key;

    let letter = match key {
        Key::R => 'R',
        Key::M => 'M',
        Key::L => 'L',
        Key::U => 'U',
        Key::E => 'E',
        Key::D => 'D',
        Key::F => 'F',
        Key::S => 'S',
        Key::B => 'B',
        _ => return None,
    };
    Move::from_letter(letter)
}

/// Opens the viewer and runs until the window closes.
pub fn display<C: Clock>(cube: Cube<C>) {
    pollster::block_on(display_async(cube));
}

async fn display_async<C: Clock>(mut cube: Cube<C>) {
    let mut window = Window::new(
        "Rubik's cube - [RMLUEDFSB] turn, [Shift] reverse, [Arrows] tilt, [Home] reset",
    )
    .await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(9.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(10.0, 10.0, 10.0));

    let mut root = scene.add_group();
    let mut snapshot = cube.snapshot();
    let mut rendered = build_scene(&mut root, &snapshot);
    sync_scene(&mut rendered, &snapshot);

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, modifiers) = event.value {
                use kiss3d::event::{Action, Key, Modifiers};
                if action != Action::Press {
                    continue;
                }
                match key {
                    Key::Left => cube.rotate_left(),
                    Key::Right => cube.rotate_right(),
                    Key::Up => cube.rotate_up(),
                    Key::Down => cube.rotate_down(),
                    Key::Home => cube.reset_view(),
                    _ => {
                        if let Some(mut mv) = slice_for_key(key) {
                            if modifiers.contains(Modifiers::Shift) {
                                mv = mv.inverse();
                            }
                            if !cube.apply(mv) {
                                log::debug!("ignored {mv}: previous move still animating");
                            }
                        }
                    }
                }
            }
        }

        let now = cube.clock().now();
        cube.tick(now);

        let latest = cube.snapshot();
        if !Arc::ptr_eq(&latest, &snapshot) {
            sync_scene(&mut rendered, &latest);
            snapshot = latest;
        }
        root.set_rotation(view_rotation(cube.view()));

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
