table! {
    mediciones (id) {
        id -> Integer,
        hora -> Nullable<Varchar>,
        lugar -> Nullable<Varchar>,
        id_sensor -> Nullable<Integer>,
        #[sql_name = "valorGas"]
        valor_gas -> Nullable<Double>,
        #[sql_name = "valorTemperatura"]
        valor_temperatura -> Nullable<Double>,
    }
}
