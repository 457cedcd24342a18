use web_sys::Element;
use yew::prelude::*;

use crate::animation::prefers_reduced_motion;

const MAX_TILT_DEG: f64 = 6.0;

/// CSS transform for a pointer at (`x`, `y`) over a `width` x `height` card.
pub fn tilt_transform(x: f64, y: f64, width: f64, height: f64) -> Option<String> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let cx = width / 2.0;
    let cy = height / 2.0;
    let rx = (y - cy) / cy;
    let ry = (x - cx) / cx;
    // Adding 0.0 turns -0.0 into 0.0 so it never prints as "-0.00".
    let rot_x = -rx * MAX_TILT_DEG + 0.0;
    let rot_y = ry * MAX_TILT_DEG + 0.0;
    Some(format!(
        "rotateX({:.2}deg) rotateY({:.2}deg) translateZ(6px)",
        rot_x, rot_y
    ))
}

pub struct Tilt {
    pub style: AttrValue,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

/// Pointer-following tilt for the element behind `node`; inert under reduced motion.
#[hook]
pub fn use_tilt(node: NodeRef) -> Tilt {
    let transform = use_state(|| None::<String>);
    let enabled = use_memo(|_| !prefers_reduced_motion(), ());

    let onmousemove = {
        let transform = transform.clone();
        let enabled = *enabled;
        Callback::from(move |e: MouseEvent| {
            if !enabled {
                return;
            }
            let Some(card) = node.cast::<Element>() else {
                return;
            };
            let rect = card.get_bounding_client_rect();
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            transform.set(tilt_transform(x, y, rect.width(), rect.height()));
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_: MouseEvent| transform.set(None))
    };

    let style = match &*transform {
        Some(t) => format!("transform-style: preserve-3d; transform: {};", t),
        None if *enabled => "transform-style: preserve-3d;".to_string(),
        None => String::new(),
    };

    Tilt {
        style: style.into(),
        onmousemove,
        onmouseleave,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(
            tilt_transform(100.0, 50.0, 200.0, 100.0).as_deref(),
            Some("rotateX(0.00deg) rotateY(0.00deg) translateZ(6px)")
        );
    }

    #[test]
    fn corners_reach_max_tilt() {
        assert_eq!(
            tilt_transform(0.0, 0.0, 200.0, 100.0).as_deref(),
            Some("rotateX(6.00deg) rotateY(-6.00deg) translateZ(6px)")
        );
        assert_eq!(
            tilt_transform(200.0, 100.0, 200.0, 100.0).as_deref(),
            Some("rotateX(-6.00deg) rotateY(6.00deg) translateZ(6px)")
        );
    }

    #[test]
    fn partial_offsets() {
        assert_eq!(
            tilt_transform(150.0, 25.0, 200.0, 100.0).as_deref(),
            Some("rotateX(3.00deg) rotateY(3.00deg) translateZ(6px)")
        );
    }

    #[test]
    fn degenerate_card_is_ignored() {
        assert_eq!(tilt_transform(1.0, 1.0, 0.0, 100.0), None);
    }
}
