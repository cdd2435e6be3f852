#![warn(missing_docs)]
//! Module for additional uom macros that facilitate the creation of Points, vecs or single unit values
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $val1:expr, $val2:expr, $val3:expr) => {
        {
        use nalgebra::Point3;
        Point3::new(
            $unit_type::new::<$unit>($val1),
            $unit_type::new::<$unit>($val2),
            $unit_type::new::<$unit>($val3))
        }
    };
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        {
            use std::vec::Vec;
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($unit_type::new::<$unit>($x));
            )*
            temp_vec
        }
    };
}

///macro to create a Length in meter
#[macro_export]
macro_rules! meter {
    ($( $x:expr ),*) =>{
        {
            use uom::si::{f64::Length, length::meter};
            $crate::uom_unit_creator![meter, Length, $( $x ),*]
        }
    };
}
///macro to create a Length in centimeter
#[macro_export]
macro_rules! centimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::centimeter};
        $crate::uom_unit_creator![centimeter, Length, $( $x ),*]
    }};
}
///macro to create a Length in millimeter
#[macro_export]
macro_rules! millimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::millimeter};
        $crate::uom_unit_creator![millimeter, Length, $( $x ),*]
    }};
}
///macro to create a Length in micrometer
#[macro_export]
macro_rules! micrometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::micrometer};
        $crate::uom_unit_creator![micrometer, Length, $( $x ),*]
    }};
}
///macro to create a Length in nanometer
#[macro_export]
macro_rules! nanometer {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::nanometer};
        $crate::uom_unit_creator![nanometer, Length, $( $x ),*]
    }};
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use uom::si::length::{centimeter, meter, micrometer, millimeter, nanometer};

    #[test]
    fn single_value() {
        assert_relative_eq!(meter!(1.5).get::<meter>(), 1.5);
        assert_relative_eq!(centimeter!(2.5).get::<centimeter>(), 2.5);
        assert_relative_eq!(millimeter!(1.5).get::<millimeter>(), 1.5);
        assert_relative_eq!(micrometer!(0.55).get::<micrometer>(), 0.55);
        assert_relative_eq!(nanometer!(550.0).get::<nanometer>(), 550.0);
    }
    #[test]
    fn point3() {
        let p = millimeter!(1.0, 2.0, 3.0);
        assert_relative_eq!(p.x.get::<millimeter>(), 1.0);
        assert_relative_eq!(p.y.get::<millimeter>(), 2.0);
        assert_relative_eq!(p.z.get::<millimeter>(), 3.0);
    }
    #[test]
    fn list_of_values() {
        let v = nanometer!(486.1, 656.3);
        assert_eq!(v.len(), 2);
        assert_relative_eq!(v[0].get::<nanometer>(), 486.1);
        assert_relative_eq!(v[1].get::<nanometer>(), 656.3);
    }
}
